// ABOUTME: Unified error handling re-exports for the HTTP layer
// ABOUTME: AppError, ErrorCode, and the JSON error envelope come from sportrec-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Domain errors from the pipeline convert into [`AppError`] through `From` impls in
//! `sportrec-intelligence`; `AppError` renders itself as an axum response.

pub use sportrec_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};
