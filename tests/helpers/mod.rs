// ABOUTME: Shared test helper modules for integration tests
// ABOUTME: Re-exports HTTP testing utilities used across test files

pub mod axum_test;
