// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID generation, span creation, and the CORS layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-origin resource sharing
pub mod cors;
/// Request IDs and per-request spans
pub mod tracing;

// CORS configuration
pub use self::cors::setup_cors;

// Request tracing and correlation
pub use self::tracing::{
    create_request_span, propagate_request_id_layer, request_id_from_headers,
    set_request_id_layer, trace_layer, PrefixedRequestId, RequestSpan,
};
