// ABOUTME: Library root for the Forkful recipe generation server
// ABOUTME: Exposes configuration, routing, provider, and normalization modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful

//! # Forkful
//!
//! AI-powered recipe generation service. Clients POST a list of ingredients
//! and optional filters to `/api/recipe/generate`; the server validates the
//! request, enforces a per-IP rate limit, builds a schema-carrying prompt,
//! calls the configured language-model provider, and returns fully-normalized
//! recipes with server-assigned identifiers and timestamps.

#![deny(unsafe_code)]

/// Server configuration from environment variables
pub mod config;
/// Unified error types and HTTP error responses
pub mod errors;
/// Language-model provider abstraction and prompt templates
pub mod llm;
/// Structured logging setup
pub mod logging;
/// Recipe domain types and API request/response models
pub mod models;
/// Provider response parsing and recipe normalization
pub mod normalizer;
/// Per-client request rate limiting
pub mod rate_limiting;
/// Shared server resource container
pub mod resources;
/// HTTP route handlers
pub mod routes;
/// HTTP server assembly and lifecycle
pub mod server;
