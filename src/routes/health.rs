// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and generation-readiness endpoints for monitoring infrastructure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful

//! Health check routes for service monitoring
//!
//! `/health` is pure liveness. `/ready` additionally reports whether the
//! generation provider is wired up, so orchestration can tell a server that
//! is merely running apart from one that can actually serve recipes.

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::resources::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler(
            State(resources): State<Arc<ServerResources>>,
        ) -> Json<serde_json::Value> {
            let provider_configured = resources.provider.is_some();
            Json(serde_json::json!({
                "status": if provider_configured { "ready" } else { "degraded" },
                "providerConfigured": provider_configured,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(resources)
    }
}
