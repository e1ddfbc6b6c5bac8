// ABOUTME: Centralized resource container shared by all route handlers
// ABOUTME: Holds the immutable recommendation pipeline and server configuration behind Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server resources
//!
//! Built once at startup and handed to every route group as axum state. Nothing in
//! here is mutated after construction, so handlers share it without locking.

use crate::config::environment::ServerConfig;
use crate::errors::AppResult;
use sportrec_intelligence::RecommendationPipeline;
use std::sync::Arc;

/// Shared state for request handlers
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Loaded vocabularies and classifier
    pub pipeline: Arc<RecommendationPipeline>,
    /// Effective configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wrap the startup state for sharing
    #[must_use]
    pub fn new(pipeline: RecommendationPipeline, config: ServerConfig) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            config: Arc::new(config),
        }
    }

    /// Load the startup artifacts named by `config` and build the shared state
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_INVALID` error if an artifact is missing or invalid, or if the
    /// artifacts disagree on the feature width
    pub fn load(config: ServerConfig) -> AppResult<Self> {
        let pipeline =
            RecommendationPipeline::from_artifacts(&config.artifacts.paths(), config.inference_mode)?;
        Ok(Self::new(pipeline, config))
    }
}
