// ABOUTME: HTTP server assembly and lifecycle for the Forkful API
// ABOUTME: Builds the axum router, configures CORS and tracing, and runs the listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful

//! HTTP server for the Forkful recipe API
//!
//! Assembles health and recipe routes into a single axum router with CORS
//! and request tracing layers, binds the configured port, and serves until
//! shutdown is requested.

use anyhow::{Context, Result};
use axum::Router;
use http::{header::HeaderName, HeaderValue, Method};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, RecipeRoutes};

/// Configure CORS settings for the API
///
/// Supports both wildcard ("*") for development and specific origin lists
/// for production via the `CORS_ALLOWED_ORIGINS` environment variable.
fn setup_cors(allowed_origins: &str) -> CorsLayer {
    let allow_origin = if allowed_origins.is_empty() || allowed_origins == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    HeaderValue::from_str(trimmed).ok()
                }
            })
            .collect();

        if origins.is_empty() {
            // Fallback to any if parsing failed
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("access-control-request-method"),
            HeaderName::from_static("access-control-request-headers"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

/// Recipe generation HTTP server
pub struct RecipeServer {
    resources: Arc<ServerResources>,
}

impl RecipeServer {
    /// Create a server from shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete application router
    #[must_use]
    pub fn router(&self) -> Router {
        let cors = setup_cors(&self.resources.config.cors_allowed_origins);

        Router::new()
            .merge(HealthRoutes::routes(self.resources.clone()))
            .merge(RecipeRoutes::routes(self.resources.clone()))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the configured port and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    /// while running.
    pub async fn run(&self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.resources.config.http_port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

        info!(
            address = %addr,
            provider_configured = self.resources.provider.is_some(),
            "Forkful server listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("Forkful server stopped");
        Ok(())
    }
}

/// Suspend until Ctrl-C is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {e}");
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_cors_accepts_wildcard_and_lists() {
        // Smoke check that neither branch panics during layer construction
        let _ = setup_cors("*");
        let _ = setup_cors("");
        let _ = setup_cors("https://app.example.com, https://admin.example.com");
        let _ = setup_cors(" , ");
    }
}
