use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    recipe::entities::{Nutrition, Recipe},
    serving::helpers::{
        daily_value_percentage, format_minutes, group_by_category, round_to, scale_ingredients,
    },
};

/// A serving count of at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Servings(u32);

impl Servings {
    pub const ONE: Servings = Servings(1);

    pub fn new(count: u32) -> Option<Self> {
        (count > 0).then_some(Self(count))
    }

    /// Requests below one serving become exactly one.
    pub fn clamped(requested: i64) -> Self {
        Self(requested.clamp(1, i64::from(u32::MAX)) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScaledIngredient {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub category: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientGroup {
    pub category: String,
    pub ingredients: Vec<ScaledIngredient>,
}

/// Recipe totals divided by the selected serving count. Calories are whole,
/// the other nutrients carry one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionPerServing {
    pub calories: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
}

impl NutritionPerServing {
    pub fn compute(totals: &Nutrition, servings: Servings) -> Self {
        let divisor = f64::from(servings.get());

        Self {
            calories: (totals.calories / divisor).round() as i64,
            protein: round_to(totals.protein / divisor, 1),
            carbs: round_to(totals.carbs / divisor, 1),
            fat: round_to(totals.fat / divisor, 1),
            fiber: round_to(totals.fiber / divisor, 1),
            sugar: round_to(totals.sugar / divisor, 1),
        }
    }

    pub fn nutrients(&self) -> Vec<NutrientValue> {
        [
            ("Calories", self.calories as f64, ""),
            ("Protein", self.protein, "g"),
            ("Carbs", self.carbs, "g"),
            ("Fat", self.fat, "g"),
            ("Fiber", self.fiber, "g"),
            ("Sugar", self.sugar, "g"),
        ]
        .into_iter()
        .map(|(name, value, unit)| NutrientValue {
            name: name.to_string(),
            value,
            unit: unit.to_string(),
            daily_value_percent: daily_value_percentage(name, value),
        })
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientValue {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub daily_value_percent: i64,
}

/// Share of per-serving calories contributed by each macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MacroBreakdown {
    pub protein_percent: i64,
    pub carbs_percent: i64,
    pub fat_percent: i64,
}

impl MacroBreakdown {
    const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
    const CARBS_KCAL_PER_GRAM: f64 = 4.0;
    const FAT_KCAL_PER_GRAM: f64 = 9.0;

    pub fn compute(per_serving: &NutritionPerServing) -> Self {
        let calories = per_serving.calories as f64;
        let share = |grams: f64, kcal_per_gram: f64| {
            if calories <= 0.0 {
                0
            } else {
                (grams * kcal_per_gram / calories * 100.0).round() as i64
            }
        };

        Self {
            protein_percent: share(per_serving.protein, Self::PROTEIN_KCAL_PER_GRAM),
            carbs_percent: share(per_serving.carbs, Self::CARBS_KCAL_PER_GRAM),
            fat_percent: share(per_serving.fat, Self::FAT_KCAL_PER_GRAM),
        }
    }
}

/// Everything the detail page renders for one serving selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScaledRecipe {
    pub recipe_id: String,
    pub title: String,
    pub base_servings: u32,
    pub servings: u32,
    pub ingredients: Vec<ScaledIngredient>,
    pub ingredient_groups: Vec<IngredientGroup>,
    pub nutrition: NutritionPerServing,
    pub nutrients: Vec<NutrientValue>,
    pub macros: MacroBreakdown,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
}

impl ScaledRecipe {
    pub fn from_recipe(recipe: &Recipe, servings: Servings) -> Self {
        let base = Servings::clamped(i64::from(recipe.servings));
        let ingredients = scale_ingredients(&recipe.ingredients, base, servings);
        let ingredient_groups = group_by_category(&ingredients);
        let nutrition = NutritionPerServing::compute(&recipe.nutrition, servings);

        Self {
            recipe_id: recipe.id.clone(),
            title: recipe.title.clone(),
            base_servings: base.get(),
            servings: servings.get(),
            ingredients,
            ingredient_groups,
            nutrients: nutrition.nutrients(),
            macros: MacroBreakdown::compute(&nutrition),
            nutrition,
            prep_time: format_minutes(recipe.prep_time),
            cook_time: format_minutes(recipe.cook_time),
            total_time: format_minutes(recipe.total_time()),
        }
    }
}
