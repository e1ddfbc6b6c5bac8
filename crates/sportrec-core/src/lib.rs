// ABOUTME: Core types and constants for the sports recommendation service
// ABOUTME: Foundation crate with unified error handling and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Sportrec Core
//!
//! Foundation crate providing shared types and constants for the sports
//! recommendation service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;
