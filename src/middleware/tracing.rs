// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates request IDs and creates spans for all HTTP requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::network::REQUEST_ID_HEADER;
use http::{header::HeaderName, HeaderMap, HeaderValue, Request};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{field, Level, Span};
use uuid::Uuid;

/// Generates `req_<uuid>` IDs for requests that arrive without one
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixedRequestId;

impl MakeRequestId for PrefixedRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&format!("req_{}", Uuid::new_v4().simple()))
            .ok()
            .map(RequestId::new)
    }
}

/// Builds the `http_request` span for each request
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let span = create_request_span(request.method().as_str(), request.uri().path());
        if let Some(request_id) = request_id_from_headers(request.headers()) {
            span.record("request_id", request_id);
        }
        span
    }
}

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = field::Empty,
    )
}

/// Read the correlation ID set by [`set_request_id_layer`], if any
#[must_use]
pub fn request_id_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Assign a request ID unless the client already sent one
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<PrefixedRequestId> {
    SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), PrefixedRequestId)
}

/// Copy the request ID onto the response
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER))
}

/// Per-request span with status logged at info on completion
#[must_use]
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}
