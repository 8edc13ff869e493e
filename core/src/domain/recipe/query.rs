//! Pure search, filter, sort and pagination over a recipe collection.
//!
//! Filtering always runs before sorting, and slicing into pages always runs
//! last, so the total counts describe the full match set.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::recipe::{
    entities::{Difficulty, Recipe},
    value_objects::{FilterOption, RecipeFilters, RecipeSearchParams, RecipeSearchResponse, SortBy, SortOrder},
};

/// Case-insensitive substring match against title, description, tags and
/// cuisine. An empty query matches everything.
pub fn matches_text(recipe: &Recipe, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    recipe.title.to_lowercase().contains(&needle)
        || recipe.description.to_lowercase().contains(&needle)
        || recipe
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
        || recipe.cuisine.to_lowercase().contains(&needle)
}

pub fn matches_filters(recipe: &Recipe, filters: &RecipeFilters) -> bool {
    if filters.is_empty() {
        return true;
    }

    if let Some(category) = filters.category.as_deref()
        && !category.is_empty()
        && recipe.category != category
    {
        return false;
    }

    if let Some(cuisine) = filters.cuisine.as_deref()
        && !cuisine.is_empty()
        && recipe.cuisine != cuisine
    {
        return false;
    }

    if let Some(difficulty) = filters.difficulty
        && recipe.difficulty != difficulty
    {
        return false;
    }

    if let Some(max_cook_time) = filters.max_cook_time
        && recipe.cook_time > max_cook_time
    {
        return false;
    }

    if !filters.tags.is_empty() && !filters.tags.iter().any(|tag| recipe.tags.contains(tag)) {
        return false;
    }

    if let Some(min_rating) = filters.min_rating
        && recipe.rating < min_rating
    {
        return false;
    }

    true
}

pub fn matches(recipe: &Recipe, params: &RecipeSearchParams) -> bool {
    matches_text(recipe, params.query.as_deref().unwrap_or_default())
        && matches_filters(recipe, &params.filters)
}

fn compare_by(a: &Recipe, b: &Recipe, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Rating => a.rating.total_cmp(&b.rating),
        SortBy::CookTime => a.cook_time.cmp(&b.cook_time),
        SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
        SortBy::Title => a.title.cmp(&b.title),
    }
}

/// Stable sort; ties keep their prior relative order in both directions.
pub fn sort_recipes(recipes: &mut [Recipe], sort_by: Option<SortBy>, order: SortOrder) {
    let Some(sort_by) = sort_by else {
        return;
    };

    recipes.sort_by(|a, b| {
        let ordering = compare_by(a, b, sort_by);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

pub fn total_pages(total_count: usize, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(limit as usize);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Returns `[(page - 1) * limit, page * limit)` clamped to `items`. Pages past
/// the end yield an empty slice.
pub fn paginate<T>(items: &[T], page: u32, limit: u32) -> &[T] {
    let page = page.max(1) as usize;
    let limit = limit as usize;

    let Some(start) = (page - 1).checked_mul(limit) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(limit).min(items.len());

    &items[start..end]
}

pub fn search(recipes: &[Recipe], params: &RecipeSearchParams) -> RecipeSearchResponse {
    let page = params.effective_page();
    let limit = params.effective_limit();

    let mut matched: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| matches(recipe, params))
        .cloned()
        .collect();

    sort_recipes(&mut matched, params.sort_by, params.sort_order);

    let total_count = matched.len();
    let total_pages = total_pages(total_count, limit);

    RecipeSearchResponse {
        recipes: paginate(&matched, page, limit).to_vec(),
        total_count,
        current_page: page,
        total_pages,
        has_next_page: page < total_pages,
        has_prev_page: page > 1,
    }
}

/// Distinct values with their occurrence counts, in first-seen order.
pub fn facet_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<FilterOption> {
    let mut options: Vec<FilterOption> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for value in values {
        match index.get(value) {
            Some(&position) => options[position].count += 1,
            None => {
                index.insert(value, options.len());
                options.push(FilterOption::new(value, 1));
            }
        }
    }

    options
}

pub fn category_options(recipes: &[Recipe]) -> Vec<FilterOption> {
    facet_counts(recipes.iter().map(|recipe| recipe.category.as_str()))
}

pub fn cuisine_options(recipes: &[Recipe]) -> Vec<FilterOption> {
    facet_counts(recipes.iter().map(|recipe| recipe.cuisine.as_str()))
}

/// One option per difficulty level, including levels with no recipes.
pub fn difficulty_options(recipes: &[Recipe]) -> Vec<FilterOption> {
    Difficulty::ALL
        .iter()
        .map(|level| {
            let count = recipes
                .iter()
                .filter(|recipe| recipe.difficulty == *level)
                .count();
            FilterOption::new(level.as_str(), count)
        })
        .collect()
}

/// The `limit` most frequent tags. Equal counts keep first-seen order.
pub fn popular_tags(recipes: &[Recipe], limit: usize) -> Vec<String> {
    let mut counts = facet_counts(
        recipes
            .iter()
            .flat_map(|recipe| recipe.tags.iter().map(String::as_str)),
    );
    counts.sort_by(|a, b| b.count.cmp(&a.count));

    counts
        .into_iter()
        .take(limit)
        .map(|option| option.value)
        .collect()
}
