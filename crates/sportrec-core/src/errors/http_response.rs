// ABOUTME: axum IntoResponse integration for AppError
// ABOUTME: Renders the JSON error envelope with the status code derived from ErrorCode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorResponse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::{error, warn};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.code.is_client_error() {
            warn!(code = ?self.code, request_id = ?self.request_id, "Request rejected: {}", self.message);
        } else {
            error!(code = ?self.code, request_id = ?self.request_id, "Request failed: {}", self.message);
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
