// ABOUTME: Recipe generation route handlers for AI-powered recipe creation
// ABOUTME: Validates input, enforces rate limiting, and orchestrates the provider call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful

//! Recipe generation routes
//!
//! The single `POST /api/recipe/generate` endpoint takes a list of
//! ingredients plus optional filters and returns a batch of fully-normalized
//! recipes. Requests are rate limited per client IP before any provider call,
//! and validation failures never consume provider quota.

use crate::{
    errors::AppError,
    llm::{
        prompts::{build_recipe_prompt, RECIPE_SYSTEM_PROMPT},
        ChatMessage, ChatRequest,
    },
    models::{GenerationRequest, GenerationResponse},
    normalizer,
    resources::ServerResources,
};
use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// Maximum number of ingredients accepted in a single request
const MAX_INGREDIENTS: usize = 20;

/// Default number of recipes generated when `count` is omitted
const DEFAULT_RECIPE_COUNT: u32 = 3;

/// Smallest and largest accepted values for `count`
const RECIPE_COUNT_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

/// Result of validating a generation request
struct ValidatedRequest {
    /// Trimmed, non-empty ingredient names
    ingredients: Vec<String>,
    /// Number of recipes to generate
    count: u32,
}

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe generation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipe/generate", post(Self::generate))
            .with_state(resources)
    }

    /// Identify the calling client for rate limiting purposes
    ///
    /// Prefers `x-forwarded-for` (first hop), falls back to `x-real-ip`, and
    /// finally to a shared `"unknown"` bucket so unidentifiable clients are
    /// still bounded collectively.
    fn client_id(headers: &HeaderMap) -> String {
        if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
            if let Some(first) = forwarded.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return first.to_owned();
                }
            }
        }

        if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
            let real_ip = real_ip.trim();
            if !real_ip.is_empty() {
                return real_ip.to_owned();
            }
        }

        "unknown".to_owned()
    }

    /// Validate and clean a generation request
    ///
    /// The ingredient cap applies to the list as submitted, so padding a
    /// too-long list with blanks does not slip it under the limit. Names
    /// are then trimmed and empties dropped, which makes a request of
    /// all-whitespace strings as invalid as an empty list. A `count`
    /// outside 1-5 is rejected rather than clamped.
    fn validate(request: &GenerationRequest) -> Result<ValidatedRequest, AppError> {
        if request.ingredients.len() > MAX_INGREDIENTS {
            return Err(AppError::invalid_input(format!(
                "Maximum {MAX_INGREDIENTS} ingredients allowed"
            )));
        }

        let ingredients: Vec<String> = request
            .ingredients
            .iter()
            .map(|i| i.trim().to_owned())
            .filter(|i| !i.is_empty())
            .collect();

        if ingredients.is_empty() {
            return Err(AppError::invalid_input("At least one ingredient is required"));
        }

        let count = match request.count {
            None => DEFAULT_RECIPE_COUNT,
            Some(n) if RECIPE_COUNT_RANGE.contains(&n) => {
                u32::try_from(n).map_err(|_| {
                    AppError::invalid_input("Recipe count must be between 1 and 5")
                })?
            }
            Some(_) => {
                return Err(AppError::invalid_input(
                    "Recipe count must be between 1 and 5",
                ))
            }
        };

        Ok(ValidatedRequest { ingredients, count })
    }

    /// Generate a batch of recipes from user ingredients
    ///
    /// Pipeline: provider availability, rate limit admission, body parsing,
    /// input validation, prompt construction, provider call, normalization.
    /// The body is taken as a `Result` so a malformed payload surfaces
    /// through the same `{error: ...}` wire shape as every other failure
    /// instead of axum's plain-text rejection.
    async fn generate(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Json<GenerationRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Some(provider) = resources.provider.as_ref() else {
            return Err(AppError::config(
                "OpenAI API is not configured. Set OPENAI_API_KEY to enable recipe generation.",
            ));
        };

        let client_id = Self::client_id(&headers);
        if !resources.rate_limiter.admit(&client_id) {
            return Err(AppError::rate_limit_exceeded());
        }

        let Json(request) = body.map_err(|rejection| {
            AppError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
        })?;

        let validated = Self::validate(&request)?;

        debug!(
            client = %client_id,
            ingredients = validated.ingredients.len(),
            count = validated.count,
            "Generating recipes"
        );

        let prompt = build_recipe_prompt(
            &validated.ingredients,
            request.filters.as_ref(),
            &request.restrictions,
            &request.exclude_ingredients,
            validated.count,
        );

        let chat_request = ChatRequest::new(vec![
            ChatMessage::system(RECIPE_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ])
        .with_temperature(resources.config.generation.temperature)
        .with_max_tokens(resources.config.generation.max_tokens);

        let completion = provider.complete(&chat_request).await?;

        let recipes = normalizer::normalize(&completion.content)?;

        info!(
            client = %client_id,
            recipes = recipes.len(),
            model = %completion.model,
            "Recipe generation complete"
        );

        let response = GenerationResponse {
            recipes,
            generated_at: Utc::now(),
        };

        Ok(Json(response).into_response())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn request_with(ingredients: &[&str], count: Option<i64>) -> GenerationRequest {
        GenerationRequest {
            ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
            filters: None,
            restrictions: Vec::new(),
            exclude_ingredients: Vec::new(),
            count,
        }
    }

    #[test]
    fn test_validate_trims_and_drops_empty_ingredients() {
        let request = request_with(&["  chicken  ", "", "   ", "rice"], None);
        let validated = match RecipeRoutes::validate(&request) {
            Ok(v) => v,
            Err(e) => panic!("expected valid request, got {e}"),
        };
        assert_eq!(validated.ingredients, vec!["chicken", "rice"]);
        assert_eq!(validated.count, DEFAULT_RECIPE_COUNT);
    }

    #[test]
    fn test_validate_rejects_all_whitespace_ingredients() {
        let request = request_with(&["   ", "\t"], None);
        let error = RecipeRoutes::validate(&request).map(|_| ()).unwrap_err();
        assert!(error.message.contains("ingredient"));
        assert_eq!(error.http_status(), 400);
    }

    #[test]
    fn test_validate_rejects_too_many_ingredients() {
        let many: Vec<String> = (0..21).map(|i| format!("item{i}")).collect();
        let request = GenerationRequest {
            ingredients: many,
            filters: None,
            restrictions: Vec::new(),
            exclude_ingredients: Vec::new(),
            count: None,
        };
        let error = RecipeRoutes::validate(&request).map(|_| ()).unwrap_err();
        assert!(error.message.contains("Maximum 20"));
    }

    #[test]
    fn test_ingredient_cap_counts_blank_entries() {
        // The cap applies to the submitted list; blanks cannot be used as
        // padding to sneak a too-long list past it.
        let mut many: Vec<String> = (0..20).map(|i| format!("item{i}")).collect();
        many.push("   ".to_owned());
        let request = GenerationRequest {
            ingredients: many,
            filters: None,
            restrictions: Vec::new(),
            exclude_ingredients: Vec::new(),
            count: None,
        };
        let error = RecipeRoutes::validate(&request).map(|_| ()).unwrap_err();
        assert!(error.message.contains("Maximum 20"));
        assert_eq!(error.http_status(), 400);
    }

    #[test]
    fn test_validate_rejects_count_out_of_range() {
        for bad in [0_i64, 6, -1, 100] {
            let request = request_with(&["chicken"], Some(bad));
            let error = RecipeRoutes::validate(&request).map(|_| ()).unwrap_err();
            assert!(error.message.contains("between 1 and 5"), "count {bad}");
        }
    }

    #[test]
    fn test_validate_accepts_count_bounds() {
        for good in [1_i64, 5] {
            let request = request_with(&["chicken"], Some(good));
            assert!(RecipeRoutes::validate(&request).is_ok(), "count {good}");
        }
    }

    #[test]
    fn test_client_id_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
        headers.insert("x-real-ip", "198.51.100.2".parse().unwrap());
        assert_eq!(RecipeRoutes::client_id(&headers), "203.0.113.7");
    }

    #[test]
    fn test_client_id_falls_back_to_real_ip_then_unknown() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", "198.51.100.2".parse().unwrap());
        assert_eq!(RecipeRoutes::client_id(&headers), "198.51.100.2");

        assert_eq!(RecipeRoutes::client_id(&HeaderMap::new()), "unknown");
    }
}
