// ABOUTME: Unified error handling for the Forkful recipe generation server
// ABOUTME: Defines error codes, the AppError type, and HTTP response mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful

//! # Unified Error Handling System
//!
//! This module provides a centralized error handling system for the Forkful
//! server. It defines standard error codes, the [`AppError`] type used across
//! all modules, and the HTTP response formatting that keeps the wire format
//! stable: `{"error": "..."}` plus `retryAfter` for local rate limiting and
//! `details` for the generic catch-all. Provider-originated errors are always
//! re-mapped to this taxonomy before they reach a client.

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Rate Limiting (2000-2999)
    /// Local per-client request ceiling reached
    #[serde(rename = "RATE_LIMIT_EXCEEDED")]
    RateLimitExceeded = 2000,

    // Validation (3000-3999)
    /// Malformed client input (empty/too-many ingredients, bad count)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // External Services (5000-5999)
    /// Generation provider failed or returned an unusable payload
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// Generation provider rejected our credentials
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed = 5002,
    /// Generation provider's own quota was exhausted
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 5003,
    /// Generation provider returned text that was not the expected JSON shape
    #[serde(rename = "PROVIDER_RESPONSE_INVALID")]
    ProviderResponseInvalid = 5004,

    // Configuration (6000-6999)
    /// Provider credential or other required configuration missing
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Catch-all internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput => 400,

            // 429 Too Many Requests - both the local ceiling and the
            // provider's quota surface the same category, with distinct
            // messages so clients can tell the origin apart
            Self::RateLimitExceeded | Self::ExternalRateLimited => 429,

            // 500 Internal Server Error - provider auth failures are a
            // server-side configuration problem, not something the caller
            // can fix, so they are not surfaced as 401/403
            Self::ExternalServiceError
            | Self::ExternalAuthFailed
            | Self::ProviderResponseInvalid
            | Self::ConfigError
            | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::RateLimitExceeded => "Rate limit exceeded",
            Self::InvalidInput => "The provided input is invalid",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalAuthFailed => "Authentication with external service failed",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::ProviderResponseInvalid => "External service returned an invalid response",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message, safe to show to the end user
    pub message: String,
    /// Internal detail string for diagnostics, surfaced only for the
    /// generic catch-all category
    pub details: Option<String>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach an internal detail string for diagnostics
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid client input, never forwarded to the generation provider
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Local rate limit ceiling hit
    #[must_use]
    pub fn rate_limit_exceeded() -> Self {
        Self::new(
            ErrorCode::RateLimitExceeded,
            "Rate limit exceeded. Please try again later.",
        )
    }

    /// Missing or invalid server configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// External service failure (transport errors, empty payloads, 5xx)
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service rejected our credentials
    #[must_use]
    pub fn external_auth(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalAuthFailed, message)
    }

    /// External service's own quota was exhausted
    #[must_use]
    pub fn external_rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalRateLimited, message)
    }

    /// Provider returned text that failed structural parsing
    #[must_use]
    pub fn provider_response_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProviderResponseInvalid, message)
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response wire format
///
/// Kept flat so browser clients read `body.error` directly. `retryAfter` is
/// present only for the local rate limit and `details` only for the generic
/// catch-all.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-facing error message
    pub error: String,
    /// Fixed human-readable retry hint for local rate limiting
    #[serde(rename = "retryAfter", skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<String>,
    /// Internal detail string for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.message.clone(),
            retry_after: (error.code == ErrorCode::RateLimitExceeded).then(|| "1 hour".to_owned()),
            details: error.details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!(code = ?self.code, "rate limited: {}", self.message);
        } else if status.is_client_error() {
            debug!(code = ?self.code, "request rejected: {}", self);
        } else {
            error!(
                code = ?self.code,
                details = self.details.as_deref().unwrap_or(""),
                "request failed: {}",
                self
            );
        }

        let body = ErrorResponse::from(&self);
        (status, Json(body)).into_response()
    }
}
