// ABOUTME: Model metadata route for client discovery
// ABOUTME: Exposes vocabularies, categorical domains, and label tables of the loaded model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::endpoints;
use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use sportrec_intelligence::ModelMetadata;
use std::sync::Arc;

/// Model metadata routes
pub struct ModelRoutes;

impl ModelRoutes {
    /// Create the metadata route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::MODEL, get(Self::handle_metadata))
            .with_state(resources)
    }

    /// GET /model - accepted tags and values, label tables, and inference settings
    async fn handle_metadata(State(resources): State<Arc<ServerResources>>) -> Json<ModelMetadata> {
        Json(resources.pipeline.metadata())
    }
}
