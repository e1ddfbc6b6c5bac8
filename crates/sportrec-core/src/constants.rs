// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Ports, endpoints, environment variable names, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// API endpoints
pub mod endpoints {
    /// Liveness endpoint
    pub const HEALTH: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
    /// Prediction endpoint
    pub const PREDICT: &str = "/predict";
    /// Model metadata endpoint
    pub const MODEL: &str = "/model";
}

/// Network defaults
pub mod network {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
    /// Default bind address
    pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
    /// Default request body limit in bytes
    pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;
    /// Header carrying the request correlation ID
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

/// Default artifact locations
pub mod artifacts {
    /// Default classifier artifact path
    pub const DEFAULT_MODEL_PATH: &str = "artifacts/sports_rec.json";
    /// Default motivation vocabulary path
    pub const DEFAULT_MOTIVATION_VOCAB_PATH: &str = "artifacts/motivation_vocab.json";
    /// Default disease history vocabulary path
    pub const DEFAULT_HEALTH_VOCAB_PATH: &str = "artifacts/health_vocab.json";
}

/// Environment variable names
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP bind address
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Classifier artifact path
    pub const MODEL_PATH: &str = "MODEL_PATH";
    /// Motivation vocabulary path
    pub const MOTIVATION_VOCAB_PATH: &str = "MOTIVATION_VOCAB_PATH";
    /// Disease history vocabulary path
    pub const HEALTH_VOCAB_PATH: &str = "HEALTH_VOCAB_PATH";
    /// Serialize classifier calls behind a mutex
    pub const INFERENCE_SERIALIZED: &str = "INFERENCE_SERIALIZED";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Request body limit
    pub const REQUEST_BODY_LIMIT_BYTES: &str = "REQUEST_BODY_LIMIT_BYTES";
    /// Allowed CORS origins (comma separated, `*` for any)
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Main server name
    pub const SPORTREC_SERVER: &str = "sportrec-server";
}
