// ABOUTME: Prompt templates for recipe generation requests
// ABOUTME: Renders user constraints and the expected output schema into instruction text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful

//! # Recipe Prompt Builder
//!
//! Pure functions that turn structured user input into the instruction string
//! sent to the generation provider. The prompt embeds a complete description
//! of the expected JSON output (the full recipe shape minus the
//! server-assigned `id`/`createdAt`/`isBookmarked` fields) and insists on raw
//! JSON with no surrounding prose or code fencing - the response normalizer
//! parses the text as-is and strips nothing.

use crate::models::RecipeFilters;
use std::fmt::Write;

/// Fixed system instruction framing the model for every generation call
pub const RECIPE_SYSTEM_PROMPT: &str = "You are a professional chef and recipe expert. \
    Generate creative, practical, and delicious recipes based on user requirements. \
    Always respond with valid JSON.";

/// JSON schema description embedded in every generation prompt
const RECIPE_SCHEMA: &str = r#"{
  "recipes": [
    {
      "name": "string (creative, appetizing recipe name)",
      "description": "string (one-liner hook that makes the recipe sound delicious)",
      "prepTime": number (preparation time in minutes),
      "cookTime": number (cooking time in minutes),
      "totalTime": number (total time in minutes),
      "servings": number (number of servings),
      "difficulty": "beginner" | "intermediate" | "advanced",
      "cuisine": "string (cuisine type)",
      "mealType": ["string"] (array of meal types: breakfast, lunch, dinner, snack, dessert),
      "ingredients": [
        {
          "id": "string (unique id)",
          "item": "string (ingredient name)",
          "amount": "string (quantity)",
          "unit": "string (measurement unit)",
          "category": "protein" | "vegetable" | "grain" | "dairy" | "fruit" | "spice" | "other",
          "isOptional": boolean
        }
      ],
      "instructions": [
        {
          "step": number,
          "instruction": "string (clear, detailed instruction)",
          "tip": "string (optional cooking tip)",
          "timing": "string (optional timing guidance)",
          "temperature": "string (optional temperature)"
        }
      ],
      "nutrition": {
        "calories": number,
        "protein": number,
        "carbs": number,
        "fat": number,
        "fiber": number,
        "sodium": number,
        "sugar": number
      },
      "tips": ["string (cooking tips, serving suggestions, etc.)"],
      "substitutions": [
        {
          "original": "string (original ingredient)",
          "replacement": "string (substitute ingredient)",
          "reason": "string (why this substitution works)"
        }
      ]
    }
  ]
}"#;

/// Closing guidelines appended to every generation prompt
const RECIPE_GUIDELINES: &str = "Important guidelines:
1. Make recipes PRACTICAL and ACHIEVABLE with common kitchen equipment
2. Use REALISTIC portions and measurements
3. Include ACCURATE nutritional estimates
4. Provide CLEAR, step-by-step instructions
5. Suggest USEFUL substitutions for dietary needs
6. Make recipe names CREATIVE and APPETIZING
7. Ensure all recipes RESPECT the dietary restrictions
8. If ingredients list is short, suggest a few optional ingredients to enhance the dish
9. Make sure cooking times are REALISTIC
10. Include helpful cooking tips and techniques

Generate recipes that a home cook would actually want to make!";

/// Render the generation prompt for the given user input
///
/// Deterministic given its inputs. Absent filter fields render as the
/// unconstrained clause ("Any cooking time is acceptable", etc.); empty
/// restriction/exclusion lists render as "none".
#[must_use]
pub fn build_recipe_prompt(
    ingredients: &[String],
    filters: Option<&RecipeFilters>,
    restrictions: &[String],
    exclude_ingredients: &[String],
    count: u32,
) -> String {
    let ingredient_list = ingredients.join(", ");
    let restriction_list = if restrictions.is_empty() {
        "none".to_owned()
    } else {
        restrictions.join(", ")
    };
    let exclude_list = if exclude_ingredients.is_empty() {
        "none".to_owned()
    } else {
        exclude_ingredients.join(", ")
    };

    let time_constraint = filters.and_then(|f| f.time_max).map_or_else(
        || "Any cooking time is acceptable".to_owned(),
        |minutes| format!("Maximum cooking time: {minutes} minutes"),
    );

    let difficulty_level = filters.and_then(|f| f.difficulty).map_or_else(
        || "Any difficulty level is acceptable".to_owned(),
        |difficulty| format!("Difficulty level: {}", difficulty.as_str()),
    );

    let meal_type_constraint = filters.and_then(|f| f.meal_type.as_deref()).map_or_else(
        || "Any meal type".to_owned(),
        |meal_type| format!("Meal type: {meal_type}"),
    );

    let cuisine_constraint = filters.and_then(|f| f.cuisine.as_deref()).map_or_else(
        || "Any cuisine style".to_owned(),
        |cuisine| format!("Cuisine preference: {cuisine}"),
    );

    let mut prompt = String::with_capacity(RECIPE_SCHEMA.len() + RECIPE_GUIDELINES.len() + 512);
    let _ = write!(
        prompt,
        "Generate {count} creative and delicious recipes using these ingredients: {ingredient_list}.

Requirements:
- {time_constraint}
- {difficulty_level}
- {meal_type_constraint}
- {cuisine_constraint}
- Dietary restrictions: {restriction_list}
- Ingredients to avoid: {exclude_list}

Return ONLY a JSON object with this exact structure:
{RECIPE_SCHEMA}

{RECIPE_GUIDELINES}"
    );
    prompt
}

/// Render a simplified prompt for quick single-recipe generation
#[must_use]
pub fn build_quick_recipe_prompt(meal_type: &str, cuisine: Option<&str>) -> String {
    let cuisine = cuisine.unwrap_or("");
    format!(
        "Generate 1 delicious {cuisine} recipe for {meal_type}.

Return ONLY valid JSON with the recipe structure as specified in the main prompt.
Make it creative, practical, and appetizing!"
    )
}

/// Direction for a recipe variation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeVariation {
    /// Lower calorie, more vegetables and whole grains
    Healthier,
    /// More heat and bold flavors
    Spicier,
    /// All meat replaced with plant-based proteins
    Vegetarian,
    /// Fewer steps, faster cooking time
    Quick,
}

impl RecipeVariation {
    /// Adjective used in the prompt text
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Healthier => "healthier",
            Self::Spicier => "spicier",
            Self::Vegetarian => "vegetarian",
            Self::Quick => "quick",
        }
    }

    /// How the variation should change the recipe
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Healthier => "lower in calories and fat, with more vegetables and whole grains",
            Self::Spicier => "with more heat and bold flavors",
            Self::Vegetarian => "replacing all meat with plant-based proteins",
            Self::Quick => "simplified with fewer steps and faster cooking time",
        }
    }
}

/// Render a prompt asking for a variation of an existing recipe
#[must_use]
pub fn build_variation_prompt(original_recipe: &str, variation: RecipeVariation) -> String {
    format!(
        "Create a {} variation of this recipe: {original_recipe}

Make the variation {}.

Return ONLY valid JSON with the full recipe structure.",
        variation.label(),
        variation.description()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_prompt_includes_ingredients_and_count() {
        let prompt = build_recipe_prompt(&owned(&["chicken", "rice"]), None, &[], &[], 3);
        assert!(prompt.starts_with("Generate 3 creative and delicious recipes"));
        assert!(prompt.contains("chicken, rice"));
    }

    #[test]
    fn test_absent_filters_render_unconstrained_clauses() {
        let prompt = build_recipe_prompt(&owned(&["eggs"]), None, &[], &[], 1);
        assert!(prompt.contains("Any cooking time is acceptable"));
        assert!(prompt.contains("Any difficulty level is acceptable"));
        assert!(prompt.contains("Any meal type"));
        assert!(prompt.contains("Any cuisine style"));
        assert!(prompt.contains("Dietary restrictions: none"));
        assert!(prompt.contains("Ingredients to avoid: none"));
    }

    #[test]
    fn test_present_filters_render_constraint_clauses() {
        let filters = RecipeFilters {
            time_max: Some(30),
            difficulty: Some(Difficulty::Beginner),
            meal_type: Some("dinner".to_owned()),
            cuisine: Some("Italian".to_owned()),
        };
        let prompt = build_recipe_prompt(
            &owned(&["pasta"]),
            Some(&filters),
            &owned(&["vegetarian", "gluten-free"]),
            &owned(&["mushrooms"]),
            2,
        );
        assert!(prompt.contains("Maximum cooking time: 30 minutes"));
        assert!(prompt.contains("Difficulty level: beginner"));
        assert!(prompt.contains("Meal type: dinner"));
        assert!(prompt.contains("Cuisine preference: Italian"));
        assert!(prompt.contains("Dietary restrictions: vegetarian, gluten-free"));
        assert!(prompt.contains("Ingredients to avoid: mushrooms"));
    }

    #[test]
    fn test_prompt_embeds_schema_and_raw_json_instruction() {
        let prompt = build_recipe_prompt(&owned(&["tofu"]), None, &[], &[], 1);
        // The normalizer strips nothing; the raw-JSON instruction is
        // correctness-critical.
        assert!(prompt.contains("Return ONLY a JSON object with this exact structure:"));
        assert!(prompt.contains("\"recipes\": ["));
        assert!(prompt.contains("\"difficulty\": \"beginner\" | \"intermediate\" | \"advanced\""));
        assert!(prompt.contains("\"nutrition\""));
    }

    #[test]
    fn test_quick_prompt_renders_meal_and_cuisine() {
        let prompt = build_quick_recipe_prompt("breakfast", Some("Mexican"));
        assert!(prompt.contains("Mexican recipe for breakfast"));

        let prompt = build_quick_recipe_prompt("lunch", None);
        assert!(prompt.contains("recipe for lunch"));
    }

    #[test]
    fn test_variation_prompt_describes_the_change() {
        let prompt = build_variation_prompt("Garlic Butter Chicken", RecipeVariation::Vegetarian);
        assert!(prompt.contains("vegetarian variation of this recipe: Garlic Butter Chicken"));
        assert!(prompt.contains("replacing all meat with plant-based proteins"));
    }
}
