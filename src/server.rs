// ABOUTME: HTTP server assembly and lifecycle for the recommendation service
// ABOUTME: Merges route groups, applies middleware layers, and serves until a shutdown signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server lifecycle
//!
//! Layer order, outermost first: request ID assignment, request span, request ID
//! propagation to the response, CORS, body limit, routes.

use crate::errors::AppError;
use crate::middleware::{
    propagate_request_id_layer, set_request_id_layer, setup_cors, trace_layer,
};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, ModelRoutes, PredictionRoutes};
use anyhow::{Context, Result};
use axum::{http::Uri, Router};
use std::future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{error, info};

/// Build the application router with all middleware applied
pub fn build_router(resources: &Arc<ServerResources>) -> Router {
    let config = &resources.config;

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(PredictionRoutes::routes(Arc::clone(resources)))
        .merge(ModelRoutes::routes(Arc::clone(resources)))
        .fallback(handle_not_found)
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(setup_cors(&config.cors))
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(set_request_id_layer())
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = resources.config.socket_addr();
    let app = build_router(&resources);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;
    info!("HTTP server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated with an error")?;

    info!("HTTP server stopped");
    Ok(())
}

/// Resolves on the first Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {e}");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining in-flight requests");
}
