// ABOUTME: Route module organization for the recommendation server HTTP endpoints
// ABOUTME: Each route group owns its paths and thin handlers that delegate to the pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains only route definitions and thin handler functions
//! that delegate to the recommendation pipeline.

/// Health check and readiness routes
pub mod health;
/// Model metadata routes
pub mod model;
/// Recommendation routes
pub mod predict;

/// Health check route handlers
pub use health::HealthRoutes;
/// Model metadata route handlers
pub use model::ModelRoutes;
/// Recommendation route handlers
pub use predict::PredictionRoutes;
