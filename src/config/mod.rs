// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-only configuration of network, artifacts, inference mode, and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables, optionally overridden by CLI flags in
//! the server binary. There is no configuration file.

/// Environment and server configuration
pub mod environment;

pub use environment::{ArtifactConfig, CorsConfig, Environment, ServerConfig};
