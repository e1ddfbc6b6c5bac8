// ABOUTME: Server binary for the sports recommendation HTTP API
// ABOUTME: Loads configuration and artifacts, initializes logging, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sportrec Server Binary
//!
//! Starts the recommendation API. Startup fails fast if any artifact is missing or
//! the artifacts disagree on the feature width.

use anyhow::{Context, Result};
use clap::Parser;
use sportrec_server::{
    config::environment::ServerConfig, logging, resources::ServerResources, server,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "sportrec-server")]
#[command(about = "Sportrec - sport recommendations from a fitness profile")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override classifier artifact path
    #[arg(long)]
    model: Option<PathBuf>,

    /// Override motivation vocabulary path
    #[arg(long)]
    motivation_vocab: Option<PathBuf>,

    /// Override disease history vocabulary path
    #[arg(long)]
    health_vocab: Option<PathBuf>,
}

impl Args {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(http_port) = self.http_port {
            config.http_port = http_port;
        }
        if let Some(path) = self.model {
            config.artifacts.model_path = path;
        }
        if let Some(path) = self.motivation_vocab {
            config.artifacts.motivation_vocab_path = path;
        }
        if let Some(path) = self.health_vocab {
            config.artifacts.health_vocab_path = path;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging first so configuration loading is logged too
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    args.apply(&mut config);

    info!("Starting Sportrec recommendation server");
    info!("{}", config.summary());

    let resources =
        ServerResources::load(config).context("Failed to load recommendation artifacts")?;

    server::run(Arc::new(resources)).await
}
