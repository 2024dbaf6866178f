// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, defaults, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful

//! Environment-based configuration management for production deployment
//!
//! The server is configured entirely from environment variables. A missing
//! `OPENAI_API_KEY` is not a startup failure: the server still serves, and
//! the generation endpoint reports the missing credential per request.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::rate_limiting::{DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW_SECS};

/// Default HTTP port
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default model requested from the provider
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI API base URL
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default sampling temperature - favors creative variation over determinism
const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Default output token ceiling per generation call
const DEFAULT_MAX_TOKENS: u32 = 2500;

/// Default upper bound on the provider round trip, in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// OpenAI provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API key; `None` means the provider is not configured
    pub api_key: Option<String>,
    /// Model identifier requested for every generation call
    pub model: String,
    /// API base URL (overridable for proxies and compatible servers)
    pub base_url: String,
}

impl OpenAiConfig {
    /// Read from `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_BASE_URL`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            model: env_var_or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            base_url: env_var_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
        }
    }

    /// Whether a credential is present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_OPENAI_MODEL.to_owned(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_owned(),
        }
    }
}

/// Fixed generation parameters sent with every provider call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Output token ceiling
    pub max_tokens: u32,
    /// Upper bound on the provider round trip, in seconds
    pub timeout_secs: u64,
}

impl GenerationConfig {
    /// Read from `GENERATION_TEMPERATURE`, `GENERATION_MAX_TOKENS`,
    /// `GENERATION_TIMEOUT_SECS`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            temperature: parse_env_or("GENERATION_TEMPERATURE", DEFAULT_TEMPERATURE),
            max_tokens: parse_env_or("GENERATION_MAX_TOKENS", DEFAULT_MAX_TOKENS),
            timeout_secs: parse_env_or("GENERATION_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Rate limiter parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Rolling window length in seconds
    pub window_secs: i64,
    /// Admitted requests per window per client
    pub max_requests: u32,
}

impl RateLimitConfig {
    /// Read from `RATE_LIMIT_WINDOW_SECS`, `RATE_LIMIT_MAX_REQUESTS`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            window_secs: parse_env_or("RATE_LIMIT_WINDOW_SECS", DEFAULT_WINDOW_SECS),
            max_requests: parse_env_or("RATE_LIMIT_MAX_REQUESTS", DEFAULT_MAX_REQUESTS),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_WINDOW_SECS,
            max_requests: DEFAULT_MAX_REQUESTS,
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Comma-separated CORS origin allowlist; empty or "*" allows any
    pub cors_allowed_origins: String,
    /// Generation provider credentials and model selection
    pub openai: OpenAiConfig,
    /// Generation call parameters
    pub generation: GenerationConfig,
    /// Rate limiter parameters
    pub rate_limit: RateLimitConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when `HTTP_PORT` is present but not a valid port.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("HTTP_PORT is not a valid port: {value}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            http_port,
            cors_allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            openai: OpenAiConfig::from_env(),
            generation: GenerationConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
        })
    }

    /// One-line startup summary, safe to log (no secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} model={} provider_configured={} temperature={} max_tokens={} timeout={}s rate_limit={}/{}s",
            self.http_port,
            self.openai.model,
            self.openai.is_configured(),
            self.generation.temperature,
            self.generation.max_tokens,
            self.generation.timeout_secs,
            self.rate_limit.max_requests,
            self.rate_limit.window_secs,
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            cors_allowed_origins: "*".to_owned(),
            openai: OpenAiConfig::default(),
            generation: GenerationConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

/// Read an environment variable with a default fallback
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to the default when the
/// variable is absent or unparseable
fn parse_env_or<T: FromStr + Copy>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
