//! Built-in recipes used to seed a first-run store so it is never empty.

use crate::model::{Difficulty, Recipe};

const DAY_MS: u64 = 86_400_000;

/// The two starter recipes, stamped relative to `now` (epoch milliseconds)
/// so a fresh store looks recently used.
pub fn sample_recipes(now: u64) -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_string(),
            title: "Creamy Garlic Pasta".to_string(),
            description: "Delicious pasta with creamy garlic sauce, ready in 30 minutes"
                .to_string(),
            ingredients: vec![
                "400g pasta".to_string(),
                "4 cloves garlic, minced".to_string(),
                "200ml heavy cream".to_string(),
                "100g grated parmesan".to_string(),
                "2 tbsp butter".to_string(),
                "Salt and pepper to taste".to_string(),
                "Fresh parsley for garnish".to_string(),
            ],
            instructions: vec![
                "Cook pasta according to package instructions until al dente".to_string(),
                "While pasta cooks, melt butter in a large pan over medium heat".to_string(),
                "Add minced garlic and sauté until fragrant (about 1 minute)".to_string(),
                "Pour in heavy cream and bring to a simmer".to_string(),
                "Stir in grated parmesan until melted and smooth".to_string(),
                "Season with salt and pepper".to_string(),
                "Drain pasta and add to the sauce, tossing to coat".to_string(),
                "Garnish with fresh parsley and serve immediately".to_string(),
            ],
            prep_time: 10,
            cook_time: 20,
            servings: 4,
            difficulty: Difficulty::Easy,
            category: "Dinner".to_string(),
            tags: vec![
                "pasta".to_string(),
                "creamy".to_string(),
                "garlic".to_string(),
                "italian".to_string(),
                "quick".to_string(),
            ],
            image_url: Some(
                "https://images.unsplash.com/photo-1563379926898-05f4575a45d8?w=800&auto=format&fit=crop"
                    .to_string(),
            ),
            notes: Some(
                "For a lighter version, use half-and-half instead of heavy cream".to_string(),
            ),
            created_at: now,
        },
        Recipe {
            id: "2".to_string(),
            title: "Classic Chocolate Chip Cookies".to_string(),
            description: "Soft and chewy chocolate chip cookies everyone will love".to_string(),
            ingredients: vec![
                "225g unsalted butter, softened".to_string(),
                "200g brown sugar".to_string(),
                "100g white sugar".to_string(),
                "2 large eggs".to_string(),
                "1 tsp vanilla extract".to_string(),
                "350g all-purpose flour".to_string(),
                "1 tsp baking soda".to_string(),
                "1 tsp salt".to_string(),
                "300g chocolate chips".to_string(),
            ],
            instructions: vec![
                "Preheat oven to 180°C (350°F) and line baking sheets with parchment paper"
                    .to_string(),
                "In a large bowl, cream together butter and sugars until light and fluffy"
                    .to_string(),
                "Beat in eggs one at a time, then stir in vanilla".to_string(),
                "In a separate bowl, combine flour, baking soda, and salt".to_string(),
                "Gradually add dry ingredients to wet ingredients, mixing until just combined"
                    .to_string(),
                "Fold in chocolate chips".to_string(),
                "Drop rounded tablespoons of dough onto prepared baking sheets".to_string(),
                "Bake for 10-12 minutes or until edges are golden brown".to_string(),
                "Let cool on baking sheet for 5 minutes before transferring to wire rack"
                    .to_string(),
            ],
            prep_time: 15,
            cook_time: 12,
            servings: 24,
            difficulty: Difficulty::Easy,
            category: "Dessert".to_string(),
            tags: vec![
                "cookies".to_string(),
                "chocolate".to_string(),
                "dessert".to_string(),
                "baking".to_string(),
                "sweet".to_string(),
            ],
            image_url: Some(
                "https://images.unsplash.com/photo-1499636136210-6f4ee915583e?w=800&auto=format&fit=crop"
                    .to_string(),
            ),
            notes: Some(
                "For extra chewy cookies, chill the dough for 30 minutes before baking"
                    .to_string(),
            ),
            created_at: now.saturating_sub(DAY_MS),
        },
    ]
}
