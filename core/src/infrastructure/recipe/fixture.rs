use std::sync::LazyLock;

use chrono::{DateTime, Utc};

use crate::domain::recipe::entities::{
    Chef, Difficulty, Ingredient, Instruction, Nutrition, Recipe,
};

const PLACEHOLDER_IMAGE: &str = "/api/placeholder/600/400";
const PLACEHOLDER_AVATAR: &str = "/api/placeholder/50/50";

static CATALOG: LazyLock<Vec<Recipe>> = LazyLock::new(build_catalog);

/// The demo catalog. Built once per process; each call returns a fresh copy.
pub fn dummy_recipes() -> Vec<Recipe> {
    CATALOG.clone()
}

fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

fn chef(name: &str, verified: bool) -> Chef {
    Chef {
        name: name.to_string(),
        avatar: Some(PLACEHOLDER_AVATAR.to_string()),
        verified,
    }
}

fn ingredient(id: &str, name: &str, amount: f64, unit: &str, category: &str) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        amount,
        unit: unit.to_string(),
        category: Some(category.to_string()),
    }
}

fn step(step: u32, description: &str, time: u32) -> Instruction {
    Instruction {
        step,
        description: description.to_string(),
        image: None,
        time: Some(time),
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|tag| tag.to_string()).collect()
}

fn nutrition(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64, sugar: f64) -> Nutrition {
    Nutrition {
        calories,
        protein,
        carbs,
        fat,
        fiber,
        sugar,
    }
}

fn build_catalog() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_string(),
            title: "Mediterranean Quinoa Bowl".to_string(),
            description: "A fresh and healthy bowl packed with roasted vegetables, creamy hummus, and a zesty lemon tahini dressing that will transport you straight to the Mediterranean coast.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            prep_time: 15,
            cook_time: 25,
            servings: 4,
            difficulty: Difficulty::Easy,
            rating: 4.8,
            review_count: 127,
            chef: chef("Maria Rodriguez", true),
            category: "Main Course".to_string(),
            cuisine: "Mediterranean".to_string(),
            tags: tags(&["Healthy", "Vegetarian", "Gluten-Free", "High-Protein"]),
            ingredients: vec![
                ingredient("1", "Quinoa", 1.0, "cup", "Grains"),
                ingredient("2", "Cherry Tomatoes", 200.0, "g", "Vegetables"),
                ingredient("3", "Cucumber", 1.0, "large", "Vegetables"),
            ],
            instructions: vec![
                step(1, "Cook quinoa according to package instructions", 15),
                step(2, "Roast vegetables in the oven at 200°C", 20),
                step(3, "Prepare tahini dressing", 5),
            ],
            nutrition: nutrition(420.0, 18.0, 52.0, 16.0, 8.0, 12.0),
            created_at: timestamp("2024-01-15T10:00:00Z"),
            updated_at: timestamp("2024-01-15T10:00:00Z"),
        },
        Recipe {
            id: "2".to_string(),
            title: "Spicy Korean Bibimbap".to_string(),
            description: "Traditional Korean mixed rice bowl with seasoned vegetables, marinated beef, and a perfect sunny-side-up egg. A symphony of flavors and textures in one bowl.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            prep_time: 30,
            cook_time: 40,
            servings: 2,
            difficulty: Difficulty::Medium,
            rating: 4.9,
            review_count: 89,
            chef: chef("Chef Kim", true),
            category: "Main Course".to_string(),
            cuisine: "Korean".to_string(),
            tags: tags(&["Spicy", "Comfort Food", "Traditional", "High-Protein"]),
            ingredients: vec![
                ingredient("4", "Jasmine Rice", 2.0, "cups", "Grains"),
                ingredient("5", "Beef Sirloin", 300.0, "g", "Meat"),
                ingredient("6", "Spinach", 200.0, "g", "Vegetables"),
            ],
            instructions: vec![
                step(1, "Cook rice and keep warm", 20),
                step(2, "Marinate and cook beef", 15),
                step(3, "Prepare seasoned vegetables", 25),
            ],
            nutrition: nutrition(580.0, 32.0, 65.0, 18.0, 6.0, 8.0),
            created_at: timestamp("2024-01-14T14:30:00Z"),
            updated_at: timestamp("2024-01-14T14:30:00Z"),
        },
        Recipe {
            id: "3".to_string(),
            title: "Chocolate Lava Cake".to_string(),
            description: "Decadent individual chocolate cakes with a molten center that flows like lava when you cut into them. Perfect for special occasions or when you need a chocolate fix.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            prep_time: 15,
            cook_time: 20,
            servings: 4,
            difficulty: Difficulty::Medium,
            rating: 4.7,
            review_count: 203,
            chef: chef("Baker Jane", false),
            category: "Dessert".to_string(),
            cuisine: "French".to_string(),
            tags: tags(&["Dessert", "Chocolate", "Date Night", "Individual Portions"]),
            ingredients: vec![
                ingredient("7", "Dark Chocolate", 200.0, "g", "Chocolate"),
                ingredient("8", "Butter", 100.0, "g", "Dairy"),
                ingredient("9", "Eggs", 2.0, "large", "Dairy"),
            ],
            instructions: vec![
                step(1, "Melt chocolate and butter", 5),
                step(2, "Mix in eggs and flour", 5),
                step(3, "Bake until edges are firm", 12),
            ],
            nutrition: nutrition(385.0, 8.0, 28.0, 28.0, 4.0, 22.0),
            created_at: timestamp("2024-01-13T16:15:00Z"),
            updated_at: timestamp("2024-01-13T16:15:00Z"),
        },
        Recipe {
            id: "4".to_string(),
            title: "Thai Green Curry".to_string(),
            description: "Aromatic and creamy curry with coconut milk, fresh herbs, and your choice of protein served with jasmine rice. A perfect balance of heat and flavor.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            prep_time: 20,
            cook_time: 35,
            servings: 4,
            difficulty: Difficulty::Medium,
            rating: 4.6,
            review_count: 156,
            chef: chef("Chef Somchai", true),
            category: "Main Course".to_string(),
            cuisine: "Thai".to_string(),
            tags: tags(&["Thai", "Curry", "Spicy", "Coconut", "Aromatic"]),
            ingredients: vec![
                ingredient("10", "Green Curry Paste", 3.0, "tbsp", "Condiments"),
                ingredient("11", "Coconut Milk", 400.0, "ml", "Dairy"),
                ingredient("12", "Chicken Thigh", 500.0, "g", "Meat"),
            ],
            instructions: vec![
                step(1, "Heat curry paste in oil", 3),
                step(2, "Add coconut milk and simmer", 10),
                step(3, "Add protein and vegetables, cook until tender", 20),
            ],
            nutrition: nutrition(445.0, 28.0, 12.0, 32.0, 3.0, 8.0),
            created_at: timestamp("2024-01-12T12:00:00Z"),
            updated_at: timestamp("2024-01-12T12:00:00Z"),
        },
        Recipe {
            id: "5".to_string(),
            title: "Classic Caesar Salad".to_string(),
            description: "Crispy romaine lettuce tossed with homemade caesar dressing, parmesan cheese, and golden croutons. A timeless classic done right.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            prep_time: 10,
            cook_time: 15,
            servings: 4,
            difficulty: Difficulty::Easy,
            rating: 4.5,
            review_count: 94,
            chef: chef("Chef Antonio", true),
            category: "Salad".to_string(),
            cuisine: "Italian".to_string(),
            tags: tags(&["Salad", "Quick", "Classic", "Vegetarian"]),
            ingredients: vec![
                ingredient("13", "Romaine Lettuce", 2.0, "heads", "Vegetables"),
                ingredient("14", "Parmesan Cheese", 100.0, "g", "Dairy"),
                ingredient("15", "Croutons", 1.0, "cup", "Bread"),
            ],
            instructions: vec![
                step(1, "Prepare caesar dressing", 5),
                step(2, "Chop lettuce and toast bread for croutons", 8),
                step(3, "Toss everything together", 2),
            ],
            nutrition: nutrition(285.0, 12.0, 18.0, 20.0, 4.0, 4.0),
            created_at: timestamp("2024-01-11T11:30:00Z"),
            updated_at: timestamp("2024-01-11T11:30:00Z"),
        },
        Recipe {
            id: "6".to_string(),
            title: "Beef Wellington".to_string(),
            description: "Tender beef fillet wrapped in mushroom duxelles and flaky puff pastry - a true culinary masterpiece that will impress any dinner guest.".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            prep_time: 45,
            cook_time: 90,
            servings: 6,
            difficulty: Difficulty::Hard,
            rating: 4.9,
            review_count: 45,
            chef: chef("Chef Gordon", true),
            category: "Main Course".to_string(),
            cuisine: "British".to_string(),
            tags: tags(&["Beef", "Elegant", "Special Occasion", "Advanced"]),
            ingredients: vec![
                ingredient("16", "Beef Tenderloin", 1.0, "kg", "Meat"),
                ingredient("17", "Puff Pastry", 500.0, "g", "Pastry"),
                ingredient("18", "Mushrooms", 400.0, "g", "Vegetables"),
            ],
            instructions: vec![
                step(1, "Sear beef on all sides", 10),
                step(2, "Prepare mushroom duxelles", 25),
                step(3, "Wrap beef in pastry and bake", 45),
            ],
            nutrition: nutrition(650.0, 42.0, 32.0, 38.0, 2.0, 3.0),
            created_at: timestamp("2024-01-10T15:45:00Z"),
            updated_at: timestamp("2024-01-10T15:45:00Z"),
        },
    ]
}
