// ABOUTME: Core data structures for recipes, generation requests, and responses
// ABOUTME: Wire format is camelCase JSON shared with the browser client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful

//! # Recipe Data Model
//!
//! Serde types for the generation endpoint. Model-returned recipe JSON is
//! deserialized tolerantly (defaults on collections and on server-assigned
//! fields) because the normalizer performs structural stamping only - it does
//! not validate nutrition ranges or instruction ordering.
//!
//! Every `Recipe` is an immutable value once returned to the client; any
//! further mutation (bookmarking, history) happens purely in client-held
//! state, never on the server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recipe difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for first-time cooks
    Beginner,
    /// Some kitchen experience assumed
    #[default]
    Intermediate,
    /// Multi-step techniques, timing-sensitive
    Advanced,
}

impl Difficulty {
    /// String form used in prompt text
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// Grocery category of an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    /// Meat, fish, tofu, legumes
    Protein,
    /// Fresh or frozen vegetables
    Vegetable,
    /// Rice, pasta, bread, oats
    Grain,
    /// Milk, cheese, yogurt, butter
    Dairy,
    /// Fresh or dried fruit
    Fruit,
    /// Herbs, spices, seasonings
    Spice,
    /// Anything else
    Other,
}

/// A single ingredient line within a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Unique within this recipe's ingredient list; assigned by the
    /// normalizer as `ing-{recipe}-{index}` when the model omits it
    #[serde(default)]
    pub id: String,
    /// Ingredient name
    #[serde(default)]
    pub item: String,
    /// Quantity as text - may be non-numeric, e.g. "to taste"
    #[serde(default)]
    pub amount: String,
    /// Measurement unit
    #[serde(default)]
    pub unit: String,
    /// Grocery category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<IngredientCategory>,
    /// Whether the dish works without it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_optional: Option<bool>,
}

/// A single numbered instruction step
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    /// 1-based step number
    #[serde(default)]
    pub step: u32,
    /// The instruction text
    #[serde(default)]
    pub instruction: String,
    /// Optional cooking tip for this step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    /// Timing guidance, e.g. "until golden brown"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
    /// Temperature guidance, e.g. "medium heat"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
}

/// Per-serving nutrition estimate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInfo {
    /// Calories per serving
    #[serde(default)]
    pub calories: f64,
    /// Protein in grams
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates in grams
    #[serde(default)]
    pub carbs: f64,
    /// Fat in grams
    #[serde(default)]
    pub fat: f64,
    /// Fiber in grams
    #[serde(default)]
    pub fiber: f64,
    /// Sodium in milligrams
    #[serde(default)]
    pub sodium: f64,
    /// Sugar in grams
    #[serde(default)]
    pub sugar: f64,
}

/// A suggested ingredient substitution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Substitution {
    /// Original ingredient
    #[serde(default)]
    pub original: String,
    /// Substitute ingredient
    #[serde(default)]
    pub replacement: String,
    /// Why the substitution works
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A generated recipe as returned to the client
///
/// `id`, `created_at`, and `is_bookmarked` are server-assigned by the
/// normalizer, never trusted from model output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// `recipe-{batch millis}-{index}`, assigned at normalization
    #[serde(default)]
    pub id: String,
    /// Recipe name
    #[serde(default)]
    pub name: String,
    /// One-line description
    #[serde(default)]
    pub description: String,
    /// Optional illustration URL (populated by the client, never the model)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time: u32,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time: u32,
    /// Total time in minutes
    #[serde(default)]
    pub total_time: u32,
    /// Number of servings
    #[serde(default)]
    pub servings: u32,
    /// Difficulty level
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Cuisine type, e.g. "Italian"
    #[serde(default)]
    pub cuisine: String,
    /// Meal types: breakfast, lunch, dinner, snack, dessert
    #[serde(default)]
    pub meal_type: Vec<String>,
    /// Ordered ingredient list
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Ordered instruction steps
    #[serde(default)]
    pub instructions: Vec<Instruction>,
    /// Nutrition estimate
    #[serde(default)]
    pub nutrition: NutritionInfo,
    /// Cooking tips and serving suggestions
    #[serde(default)]
    pub tips: Vec<String>,
    /// Suggested substitutions for dietary needs
    #[serde(default)]
    pub substitutions: Vec<Substitution>,
    /// Assigned at normalization; shared across one generation batch
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Always false from the server; bookmarking is client-side state
    #[serde(default)]
    pub is_bookmarked: bool,
}

/// Structured generation preferences
///
/// Absent fields mean "no preference" - there are no "Any" sentinel strings
/// on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFilters {
    /// Maximum total cooking time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_max: Option<u32>,
    /// Desired difficulty level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Desired meal type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    /// Desired cuisine style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
}

/// Request body for `POST /api/recipe/generate`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Available ingredients; trimmed, non-empty, at most 20
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Optional structured preferences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<RecipeFilters>,
    /// Dietary restriction labels, e.g. "vegetarian", "gluten-free"
    #[serde(default)]
    pub restrictions: Vec<String>,
    /// Ingredients the recipes must avoid
    #[serde(default)]
    pub exclude_ingredients: Vec<String>,
    /// How many recipes to generate; must fall in [1,5], defaults to 3.
    /// Signed so an out-of-range negative is rejected by our validation
    /// with a 400 rather than by the JSON deserializer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

/// Response body for a successful generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    /// The stamped recipe batch
    pub recipes: Vec<Recipe>,
    /// Batch-level timestamp
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_recipe_deserializes_without_server_fields() {
        // The model never returns id/createdAt/isBookmarked; deserialization
        // must still succeed so the normalizer can stamp them.
        let json = r#"{
            "name": "Garlic Butter Chicken",
            "description": "Weeknight skillet chicken",
            "prepTime": 10,
            "cookTime": 20,
            "totalTime": 30,
            "servings": 4,
            "difficulty": "beginner",
            "cuisine": "American",
            "mealType": ["dinner"],
            "ingredients": [
                {"item": "chicken thighs", "amount": "500", "unit": "g", "category": "protein"}
            ],
            "instructions": [
                {"step": 1, "instruction": "Sear the chicken.", "temperature": "medium-high heat"}
            ],
            "nutrition": {"calories": 420, "protein": 38, "carbs": 4, "fat": 28, "fiber": 0, "sodium": 520, "sugar": 1},
            "tips": ["Rest before serving"],
            "substitutions": [{"original": "butter", "replacement": "ghee", "reason": "higher smoke point"}]
        }"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert!(recipe.id.is_empty());
        assert!(!recipe.is_bookmarked);
        assert_eq!(recipe.difficulty, Difficulty::Beginner);
        assert_eq!(recipe.ingredients.len(), 1);
        assert!(recipe.ingredients[0].id.is_empty());
        assert_eq!(
            recipe.ingredients[0].category,
            Some(IngredientCategory::Protein)
        );
    }

    #[test]
    fn test_generation_request_wire_names() {
        let json = r#"{
            "ingredients": ["chicken", "rice"],
            "filters": {"timeMax": 30, "mealType": "dinner"},
            "excludeIngredients": ["peanuts"],
            "count": 2
        }"#;

        let request: GenerationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.ingredients, vec!["chicken", "rice"]);
        assert_eq!(request.filters.as_ref().unwrap().time_max, Some(30));
        assert_eq!(request.exclude_ingredients, vec!["peanuts"]);
        assert_eq!(request.count, Some(2));
        assert!(request.restrictions.is_empty());
    }

    #[test]
    fn test_recipe_serializes_camel_case() {
        let recipe = Recipe {
            id: "recipe-1-0".to_owned(),
            name: "Test".to_owned(),
            description: String::new(),
            image_url: None,
            prep_time: 5,
            cook_time: 10,
            total_time: 15,
            servings: 2,
            difficulty: Difficulty::Advanced,
            cuisine: "Thai".to_owned(),
            meal_type: vec!["dinner".to_owned()],
            ingredients: Vec::new(),
            instructions: Vec::new(),
            nutrition: NutritionInfo::default(),
            tips: Vec::new(),
            substitutions: Vec::new(),
            created_at: Utc::now(),
            is_bookmarked: false,
        };

        let json = serde_json::to_string(&recipe).unwrap();
        assert!(json.contains("\"prepTime\":5"));
        assert!(json.contains("\"isBookmarked\":false"));
        assert!(json.contains("\"difficulty\":\"advanced\""));
        assert!(json.contains("createdAt"));
        // image_url is absent, not null
        assert!(!json.contains("imageUrl"));
    }
}
