// ABOUTME: System-wide constants for the recommendation server
// ABOUTME: Re-exports the domain-separated constants from sportrec-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Endpoints, network defaults, artifact locations, and environment variable names.
//! The definitions live in `sportrec-core` so every crate agrees on them.

pub use sportrec_core::constants::{artifacts, endpoints, env_config, network, service_names};
