// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses listen address, artifact paths, inference mode, and limits from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{artifacts, env_config, network};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use sportrec_intelligence::{ArtifactPaths, InferenceMode};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::info;

/// Environment type for logging detail and other deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Startup artifact locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactConfig {
    /// Classifier weight file
    pub model_path: PathBuf,
    /// Fitted motivation vocabulary
    pub motivation_vocab_path: PathBuf,
    /// Fitted disease history vocabulary
    pub health_vocab_path: PathBuf,
}

impl ArtifactConfig {
    /// Paths in the form the pipeline loader expects
    #[must_use]
    pub fn paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            model: self.model_path.clone(),
            motivation_vocabulary: self.motivation_vocab_path.clone(),
            health_vocabulary: self.health_vocab_path.clone(),
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(artifacts::DEFAULT_MODEL_PATH),
            motivation_vocab_path: PathBuf::from(artifacts::DEFAULT_MOTIVATION_VOCAB_PATH),
            health_vocab_path: PathBuf::from(artifacts::DEFAULT_HEALTH_VOCAB_PATH),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Whether every origin is allowed
    #[must_use]
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_owned()],
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub http_host: IpAddr,
    /// Listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Startup artifacts
    pub artifacts: ArtifactConfig,
    /// How classifier calls are scheduled
    pub inference_mode: InferenceMode,
    /// Maximum accepted request body size
    pub body_limit_bytes: usize,
    /// Cross-origin settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: IpAddr::from([0, 0, 0, 0]),
            http_port: network::DEFAULT_HTTP_PORT,
            environment: Environment::Development,
            artifacts: ArtifactConfig::default(),
            inference_mode: InferenceMode::Concurrent,
            body_limit_bytes: network::DEFAULT_BODY_LIMIT_BYTES,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let serialized = parse_bool(
            env_config::INFERENCE_SERIALIZED,
            &env_var_or(env_config::INFERENCE_SERIALIZED, "false"),
        )?;

        let config = Self {
            http_host: env_var_or(env_config::HTTP_HOST, network::DEFAULT_HTTP_HOST)
                .parse()
                .context("Invalid HTTP_HOST value")?,
            http_port: env_var_or(
                env_config::HTTP_PORT,
                &network::DEFAULT_HTTP_PORT.to_string(),
            )
            .parse()
            .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            artifacts: ArtifactConfig {
                model_path: PathBuf::from(env_var_or(
                    env_config::MODEL_PATH,
                    artifacts::DEFAULT_MODEL_PATH,
                )),
                motivation_vocab_path: PathBuf::from(env_var_or(
                    env_config::MOTIVATION_VOCAB_PATH,
                    artifacts::DEFAULT_MOTIVATION_VOCAB_PATH,
                )),
                health_vocab_path: PathBuf::from(env_var_or(
                    env_config::HEALTH_VOCAB_PATH,
                    artifacts::DEFAULT_HEALTH_VOCAB_PATH,
                )),
            },
            inference_mode: if serialized {
                InferenceMode::Serialized
            } else {
                InferenceMode::Concurrent
            },
            body_limit_bytes: env_var_or(
                env_config::REQUEST_BODY_LIMIT_BYTES,
                &network::DEFAULT_BODY_LIMIT_BYTES.to_string(),
            )
            .parse()
            .context("Invalid REQUEST_BODY_LIMIT_BYTES value")?,
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or(env_config::CORS_ALLOWED_ORIGINS, "*")),
            },
        };

        if config.body_limit_bytes == 0 {
            bail!("REQUEST_BODY_LIMIT_BYTES must be greater than zero");
        }

        Ok(config)
    }

    /// Address the HTTP listener binds to
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }

    /// One-line configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Sportrec Server Configuration: listen={} environment={} model={} \
             motivation_vocab={} health_vocab={} inference={} body_limit={}B cors={}",
            self.socket_addr(),
            self.environment,
            self.artifacts.model_path.display(),
            self.artifacts.motivation_vocab_path.display(),
            self.artifacts.health_vocab_path.display(),
            self.inference_mode,
            self.body_limit_bytes,
            if self.cors.allows_any() {
                "*".to_owned()
            } else {
                self.cors.allowed_origins.join(",")
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a boolean flag (`true`/`1`/`yes` or `false`/`0`/`no`)
fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("Invalid {key} value: {other}"),
    }
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
