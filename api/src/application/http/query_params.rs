use std::collections::HashMap;
use std::str::FromStr;

use cookbook_core::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Difficulty,
        value_objects::{
            DEFAULT_PAGE, DEFAULT_PAGE_SIZE, RecipeFilters, RecipeSearchParams, SortBy, SortOrder,
        },
    },
};

pub const MAX_PAGE_SIZE: i64 = 100;

/// Filter operator for query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,  // equals (default)
    Gte, // greater than or equal
    Lte, // less than or equal
    In,  // any of a comma-separated list
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "gte" => Ok(FilterOperator::Gte),
            "lte" => Ok(FilterOperator::Lte),
            "in" => Ok(FilterOperator::In),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parse a sort string like "title" or "-rating"
    pub fn from_string(s: &str) -> Option<Self> {
        let part = s.trim();
        if part.is_empty() {
            return None;
        }

        let spec = match part.strip_prefix('-') {
            Some(stripped) => SortSpec {
                field: stripped.to_string(),
                direction: SortDirection::Desc,
            },
            None => SortSpec {
                field: part.to_string(),
                direction: SortDirection::Asc,
            },
        };
        Some(spec)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u32,
    pub limit: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl PaginationParams {
    /// A missing or zero value falls back to the default.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page
            .filter(|page| *page != 0)
            .unwrap_or(DEFAULT_PAGE as i64)
            .clamp(1, u32::MAX as i64);
        let limit = limit
            .filter(|limit| *limit != 0)
            .unwrap_or(DEFAULT_PAGE_SIZE as i64)
            .clamp(1, MAX_PAGE_SIZE);

        Self {
            page: page as u32,
            limit: limit as u32,
        }
    }
}

/// Raw listing query: free text, bracketed filters, sort and pagination
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pub query: Option<String>,
    pub filters: Vec<FilterCondition>,
    pub sort: Option<SortSpec>,
    pub pagination: PaginationParams,
}

impl QueryParams {
    /// Parse from query string map
    /// Handles formats like:
    /// - q=text
    /// - filter[field]=value (defaults to eq)
    /// - filter[field][operator]=value
    /// - sort=field or sort=-field
    /// - page=1, limit=12
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filters = Vec::new();
        let mut query = None;
        let mut sort = None;
        let mut page: Option<i64> = None;
        let mut limit: Option<i64> = None;

        for (key, value) in query_map {
            if let Some(filter_key) = key.strip_prefix("filter[") {
                if let Some(end_bracket) = filter_key.find(']') {
                    let field = filter_key[..end_bracket].to_string();
                    let remaining = &filter_key[end_bracket + 1..];

                    if remaining.is_empty() {
                        filters.push(FilterCondition {
                            field,
                            operator: FilterOperator::Eq,
                            value: value.clone(),
                        });
                    } else if let Some(operator_str) = remaining
                        .strip_prefix('[')
                        .and_then(|rest| rest.strip_suffix(']'))
                        && let Ok(operator) = operator_str.parse::<FilterOperator>()
                    {
                        filters.push(FilterCondition {
                            field,
                            operator,
                            value: value.clone(),
                        });
                    }
                }
            } else if key == "q" {
                query = Some(value.clone());
            } else if key == "sort" {
                sort = SortSpec::from_string(value);
            } else if key == "page" {
                page = value.parse::<i64>().ok();
            } else if key == "limit" {
                limit = value.parse::<i64>().ok();
            }
        }

        // HashMap iteration order is arbitrary.
        filters.sort_by(|a: &FilterCondition, b| a.field.cmp(&b.field));

        Self {
            query,
            filters,
            sort,
            pagination: PaginationParams::new(page, limit),
        }
    }

    fn apply_filter(
        filters: &mut RecipeFilters,
        condition: &FilterCondition,
    ) -> Result<(), CoreError> {
        let value = condition.value.trim();

        match (condition.field.as_str(), condition.operator) {
            ("category", FilterOperator::Eq) => filters.category = Some(value.to_string()),
            ("cuisine", FilterOperator::Eq) => filters.cuisine = Some(value.to_string()),
            ("difficulty", FilterOperator::Eq) => {
                filters.difficulty = if value.is_empty() {
                    None
                } else {
                    Some(value.parse::<Difficulty>()?)
                };
            }
            ("cook_time", FilterOperator::Lte) => {
                let minutes = value.parse::<u32>().map_err(|_| {
                    CoreError::InvalidQuery(format!("invalid cook time '{value}'"))
                })?;
                filters.max_cook_time = Some(minutes);
            }
            ("tags", FilterOperator::Eq | FilterOperator::In) => {
                filters.tags = value
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            ("rating", FilterOperator::Gte) => {
                let rating = value
                    .parse::<f64>()
                    .ok()
                    .filter(|rating| rating.is_finite())
                    .ok_or_else(|| CoreError::InvalidQuery(format!("invalid rating '{value}'")))?;
                filters.min_rating = Some(rating);
            }
            (field, operator) => {
                return Err(CoreError::InvalidQuery(format!(
                    "unsupported filter '{field}' with operator {operator:?}"
                )));
            }
        }

        Ok(())
    }
}

impl TryFrom<QueryParams> for RecipeSearchParams {
    type Error = CoreError;

    fn try_from(params: QueryParams) -> Result<Self, Self::Error> {
        let mut filters = RecipeFilters::default();
        for condition in &params.filters {
            QueryParams::apply_filter(&mut filters, condition)?;
        }

        let (sort_by, sort_order) = match params.sort {
            Some(spec) => {
                let order = match spec.direction {
                    SortDirection::Asc => SortOrder::Asc,
                    SortDirection::Desc => SortOrder::Desc,
                };
                (Some(spec.field.parse::<SortBy>()?), order)
            }
            None => (Some(SortBy::Rating), SortOrder::Desc),
        };

        Ok(RecipeSearchParams {
            query: params.query.filter(|query| !query.trim().is_empty()),
            filters,
            sort_by,
            sort_order,
            page: params.pagination.page,
            limit: params.pagination.limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_filter_parse_simple() {
        let params = QueryParams::from_query_map(&map(&[("filter[cuisine]", "Korean")]));
        assert_eq!(params.filters.len(), 1);
        assert_eq!(params.filters[0].field, "cuisine");
        assert_eq!(params.filters[0].operator, FilterOperator::Eq);
        assert_eq!(params.filters[0].value, "Korean");
    }

    #[test]
    fn test_filter_parse_with_operator() {
        let params = QueryParams::from_query_map(&map(&[("filter[cook_time][lte]", "30")]));
        assert_eq!(params.filters[0].field, "cook_time");
        assert_eq!(params.filters[0].operator, FilterOperator::Lte);
    }

    #[test]
    fn test_unknown_operator_is_dropped() {
        let params = QueryParams::from_query_map(&map(&[("filter[rating][between]", "4")]));
        assert!(params.filters.is_empty());
    }

    #[test]
    fn test_sort_parse() {
        let params = QueryParams::from_query_map(&map(&[("sort", "-rating")]));
        let sort = params.sort.unwrap();
        assert_eq!(sort.field, "rating");
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_pagination_defaults_and_bounds() {
        let params = QueryParams::from_query_map(&HashMap::new());
        assert_eq!(params.pagination, PaginationParams { page: 1, limit: 12 });

        let params = QueryParams::from_query_map(&map(&[("page", "0"), ("limit", "500")]));
        assert_eq!(params.pagination, PaginationParams { page: 1, limit: 100 });

        let params = QueryParams::from_query_map(&map(&[("limit", "0")]));
        assert_eq!(params.pagination, PaginationParams { page: 1, limit: 12 });
    }

    #[test]
    fn test_into_search_params() {
        let params = QueryParams::from_query_map(&map(&[
            ("q", "spicy"),
            ("filter[difficulty]", "medium"),
            ("filter[tags][in]", "Vegan, Healthy"),
            ("filter[rating][gte]", "4.5"),
            ("sort", "title"),
            ("page", "2"),
        ]));
        let search = RecipeSearchParams::try_from(params).unwrap();

        assert_eq!(search.query.as_deref(), Some("spicy"));
        assert_eq!(search.filters.difficulty, Some(Difficulty::Medium));
        assert_eq!(search.filters.tags, vec!["Vegan", "Healthy"]);
        assert_eq!(search.filters.min_rating, Some(4.5));
        assert_eq!(search.sort_by, Some(SortBy::Title));
        assert_eq!(search.sort_order, SortOrder::Asc);
        assert_eq!(search.page, 2);
    }

    #[test]
    fn test_missing_sort_defaults_to_rating_desc() {
        let search = RecipeSearchParams::try_from(QueryParams::default()).unwrap();
        assert_eq!(search.sort_by, Some(SortBy::Rating));
        assert_eq!(search.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        for pairs in [
            [("filter[difficulty]", "extreme")],
            [("sort", "-popularity")],
            [("filter[cook_time][lte]", "soon")],
            [("filter[chef]", "Marco")],
        ] {
            let params = QueryParams::from_query_map(&map(&pairs));
            assert!(matches!(
                RecipeSearchParams::try_from(params),
                Err(CoreError::InvalidQuery(_))
            ));
        }
    }
}
