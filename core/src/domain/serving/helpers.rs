use crate::domain::{
    recipe::entities::Ingredient,
    serving::value_objects::{IngredientGroup, ScaledIngredient, Servings},
};

/// Reference daily intake per nutrient, based on a 2000 calorie diet.
pub const DAILY_VALUES: [(&str, f64); 6] = [
    ("Calories", 2000.0),
    ("Protein", 50.0),
    ("Carbs", 300.0),
    ("Fat", 65.0),
    ("Fiber", 25.0),
    ("Sugar", 50.0),
];

const FRACTION_GLYPHS: [(i64, &str); 5] = [(25, "¼"), (33, "⅓"), (50, "½"), (66, "⅔"), (75, "¾")];

/// Scales an amount defined for `base` servings to `target` servings. No
/// rounding happens here.
pub fn scale_amount(base_amount: f64, base: Servings, target: Servings) -> f64 {
    base_amount * f64::from(target.get()) / f64::from(base.get())
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Renders an amount for display: two-decimal rounding, whole numbers without
/// a fractional part, and a vulgar-fraction glyph when the rounded value is
/// exactly one of 0.25, 0.33, 0.5, 0.66 or 0.75.
pub fn format_amount(amount: f64, unit: &str) -> String {
    let hundredths = (amount * 100.0).round();
    let rounded = hundredths / 100.0;

    let glyph = FRACTION_GLYPHS
        .iter()
        .find(|(key, _)| hundredths == *key as f64)
        .map(|(_, glyph)| *glyph);

    let quantity = match glyph {
        Some(glyph) => glyph.to_string(),
        None if rounded.fract() == 0.0 => format!("{rounded:.0}"),
        None => format!("{rounded}"),
    };

    if unit.is_empty() {
        quantity
    } else {
        format!("{quantity} {unit}")
    }
}

/// Percentage of the reference intake, rounded. Unknown nutrients yield 0.
pub fn daily_value_percentage(nutrient: &str, per_serving: f64) -> i64 {
    DAILY_VALUES
        .iter()
        .find(|(name, _)| *name == nutrient)
        .map(|(_, reference)| (per_serving / reference * 100.0).round() as i64)
        .unwrap_or(0)
}

/// `45m`, `1h`, `1h 30m`.
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining > 0 {
        format!("{hours}h {remaining}m")
    } else {
        format!("{hours}h")
    }
}

pub fn scale_ingredients(
    ingredients: &[Ingredient],
    base: Servings,
    target: Servings,
) -> Vec<ScaledIngredient> {
    ingredients
        .iter()
        .map(|ingredient| {
            let amount = scale_amount(ingredient.amount, base, target);
            ScaledIngredient {
                id: ingredient.id.clone(),
                name: ingredient.name.clone(),
                amount,
                unit: ingredient.unit.clone(),
                category: ingredient.category_or_default().to_string(),
                display: format_amount(amount, &ingredient.unit),
            }
        })
        .collect()
}

/// Groups by category in first-seen order; ingredient order is kept within
/// each group.
pub fn group_by_category(ingredients: &[ScaledIngredient]) -> Vec<IngredientGroup> {
    let mut groups: Vec<IngredientGroup> = Vec::new();

    for ingredient in ingredients {
        match groups
            .iter_mut()
            .find(|group| group.category == ingredient.category)
        {
            Some(group) => group.ingredients.push(ingredient.clone()),
            None => groups.push(IngredientGroup {
                category: ingredient.category.clone(),
                ingredients: vec![ingredient.clone()],
            }),
        }
    }

    groups
}
