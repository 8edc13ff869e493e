use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Difficulty, Recipe},
};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const DEFAULT_POPULAR_TAGS: usize = 10;

/// Structured filters applied conjunctively. `None`, an empty string and an
/// empty tag list all mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeFilters {
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Inclusive upper bound on cook time, in minutes.
    pub max_cook_time: Option<u32>,
    /// Matches when the recipe carries at least one of these tags.
    pub tags: Vec<String>,
    /// Inclusive lower bound on rating.
    pub min_rating: Option<f64>,
}

impl RecipeFilters {
    pub fn is_empty(&self) -> bool {
        self.category.as_deref().is_none_or(str::is_empty)
            && self.cuisine.as_deref().is_none_or(str::is_empty)
            && self.difficulty.is_none()
            && self.max_cook_time.is_none()
            && self.tags.is_empty()
            && self.min_rating.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Rating,
    CookTime,
    CreatedAt,
    Title,
}

impl FromStr for SortBy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(SortBy::Rating),
            "cook_time" | "cookTime" => Ok(SortBy::CookTime),
            "created_at" | "createdAt" => Ok(SortBy::CreatedAt),
            "title" => Ok(SortBy::Title),
            other => Err(CoreError::InvalidQuery(format!(
                "unknown sort key '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// A complete, serializable catalog query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSearchParams {
    pub query: Option<String>,
    pub filters: RecipeFilters,
    /// `None` keeps catalog order.
    pub sort_by: Option<SortBy>,
    pub sort_order: SortOrder,
    /// 1-based.
    pub page: u32,
    pub limit: u32,
}

impl Default for RecipeSearchParams {
    fn default() -> Self {
        Self {
            query: None,
            filters: RecipeFilters::default(),
            sort_by: Some(SortBy::Rating),
            sort_order: SortOrder::Desc,
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RecipeSearchParams {
    pub fn effective_page(&self) -> u32 {
        if self.page == 0 { DEFAULT_PAGE } else { self.page }
    }

    pub fn effective_limit(&self) -> u32 {
        if self.limit == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.limit
        }
    }

    /// New search text; the listing restarts at page 1.
    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            page: DEFAULT_PAGE,
            ..self
        }
    }

    /// New filter set; the listing restarts at page 1.
    pub fn with_filters(self, filters: RecipeFilters) -> Self {
        Self {
            filters,
            page: DEFAULT_PAGE,
            ..self
        }
    }

    pub fn with_sort(self, sort_by: Option<SortBy>, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
            ..self
        }
    }

    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSearchResponse {
    pub recipes: Vec<Recipe>,
    pub total_count: usize,
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
    pub count: usize,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            count,
        }
    }
}
