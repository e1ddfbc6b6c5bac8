// ABOUTME: Main library entry point for the sports recommendation HTTP service
// ABOUTME: Wires configuration, logging, middleware, and routes around the recommendation pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Sportrec Server
//!
//! HTTP front end for the sports recommendation pipeline. A client posts a fitness
//! profile and receives three recommended sports, a session length, and a weekly
//! frequency.
//!
//! ## Architecture
//!
//! - **Pipeline**: encoders, inference adapter and decoders live in `sportrec-intelligence`
//! - **Errors and constants**: shared types live in `sportrec-core`
//! - **This crate**: environment configuration, structured logging, request tracing,
//!   and the axum routes
//!
//! ## Example
//!
//! ```rust,no_run
//! use sportrec_server::config::environment::ServerConfig;
//! use sportrec_server::resources::ServerResources;
//! use sportrec_server::server;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! let resources = Arc::new(ServerResources::load(config)?);
//! server::run(resources).await?;
//! # Ok(())
//! # }
//! ```

/// Environment-based server configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error types re-exported from the core crate
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request IDs, tracing)
pub mod middleware;

/// Shared state handed to route handlers
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
