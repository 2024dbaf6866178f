// ABOUTME: HTTP route handlers organized by domain
// ABOUTME: Central module for all REST endpoint implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful

//! HTTP route handlers for the Forkful API

/// Health check endpoints
pub mod health;
/// Recipe generation endpoints
pub mod recipes;

pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;
