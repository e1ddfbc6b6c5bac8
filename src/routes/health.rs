// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for load balancers and orchestrators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! The server only starts listening after the pipeline has loaded, so readiness
//! reports the loaded model rather than polling anything.

use crate::constants::endpoints;
use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::HEALTH, get(Self::handle_health))
            .route(endpoints::READY, get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Json<Value> {
        Json(json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "inferenceMode": resources.pipeline.inference_mode(),
            "sportsInputDimension": resources.pipeline.sports_input_dimension()
        }))
    }
}
