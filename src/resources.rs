// ABOUTME: Shared server resources passed to route handlers
// ABOUTME: Bundles configuration, the rate limiter, and the generation provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful

//! Centralized resource container for dependency injection into routes.
//!
//! Built once at startup and shared across handlers behind an [`Arc`],
//! so each request sees the same rate limiter state and provider client.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::llm::LlmProvider;
use crate::rate_limiting::RateLimiter;

/// Container for all shared server dependencies
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Per-client request rate limiter
    pub rate_limiter: RateLimiter,
    /// Recipe generation provider, `None` when no API key is configured
    pub provider: Option<Arc<dyn LlmProvider>>,
}

impl ServerResources {
    /// Create a resource container from configuration and an optional provider
    #[must_use]
    pub fn new(config: ServerConfig, provider: Option<Arc<dyn LlmProvider>>) -> Self {
        let rate_limiter = RateLimiter::new(
            config.rate_limit.window_secs,
            config.rate_limit.max_requests,
        );

        Self {
            config,
            rate_limiter,
            provider,
        }
    }
}

impl std::fmt::Debug for ServerResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerResources")
            .field("config", &self.config.summary())
            .field("provider_configured", &self.provider.is_some())
            .finish_non_exhaustive()
    }
}
