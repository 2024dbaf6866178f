// ABOUTME: Response normalizer for provider-returned recipe JSON
// ABOUTME: Parses raw text, validates the top-level shape, and stamps server-assigned fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful

//! # Response Normalizer
//!
//! Turns the provider's raw text into stamped [`Recipe`] values. Parsing is
//! strictly structural: the text must be valid JSON with a top-level
//! `recipes` array, and each element must deserialize into the tolerant
//! [`Recipe`] shape. Nutrition ranges, instruction ordering, and culinary
//! sense are not checked here.
//!
//! Stamping rules:
//! - every recipe gets `id = recipe-{millis}-{index}`; the timestamp is
//!   captured once per call, so all recipes in one batch share the same
//!   prefix (batch identity, preserved deliberately)
//! - `createdAt` is set to now and `isBookmarked` forced to `false`
//!   regardless of anything the model emitted
//! - an ingredient keeps a model-provided id verbatim; only missing ids are
//!   filled in as `ing-{recipe}-{ingredient}`, which makes them unique
//!   within one ingredient array but not globally (accepted scope limit)

use chrono::Utc;
use tracing::{debug, error};

use crate::errors::AppError;
use crate::models::Recipe;

/// How much of the raw provider text to keep in diagnostic logs
const RAW_LOG_LIMIT: usize = 500;

/// Parse and stamp a provider response
///
/// # Errors
///
/// Returns a `ProviderResponseInvalid` error when the text is not valid
/// JSON, lacks a `recipes` array, or an element does not fit the recipe
/// shape. The raw text is logged (truncated) for diagnosis and never
/// included in the error shown to the caller.
pub fn normalize(raw_text: &str) -> Result<Vec<Recipe>, AppError> {
    let value: serde_json::Value = serde_json::from_str(raw_text).map_err(|e| {
        error!(
            raw = %truncate(raw_text),
            "Provider response is not valid JSON: {e}"
        );
        AppError::provider_response_invalid("Invalid response format from generation provider")
    })?;

    let Some(entries) = value.get("recipes").and_then(serde_json::Value::as_array) else {
        error!(
            raw = %truncate(raw_text),
            "Provider response lacks a recipes array"
        );
        return Err(AppError::provider_response_invalid(
            "Invalid response format from generation provider",
        ));
    };

    let created_at = Utc::now();
    let batch_millis = created_at.timestamp_millis();

    let mut recipes = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let mut recipe: Recipe = serde_json::from_value(entry.clone()).map_err(|e| {
            error!(
                raw = %truncate(raw_text),
                index,
                "Provider recipe entry does not fit the expected shape: {e}"
            );
            AppError::provider_response_invalid("Invalid response format from generation provider")
        })?;

        recipe.id = format!("recipe-{batch_millis}-{index}");
        recipe.created_at = created_at;
        recipe.is_bookmarked = false;

        for (ingredient_index, ingredient) in recipe.ingredients.iter_mut().enumerate() {
            if ingredient.id.is_empty() {
                ingredient.id = format!("ing-{index}-{ingredient_index}");
            }
        }

        recipes.push(recipe);
    }

    debug!(count = recipes.len(), "Normalized provider response");
    Ok(recipes)
}

fn truncate(text: &str) -> String {
    text.chars().take(RAW_LOG_LIMIT).collect()
}
