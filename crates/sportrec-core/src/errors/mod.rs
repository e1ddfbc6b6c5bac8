// ABOUTME: Unified error handling system with standard error codes and HTTP responses
// ABOUTME: Defines AppError, ErrorCode, and the JSON error envelope returned to clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure that reaches the HTTP boundary is expressed as an [`AppError`].
//! The [`ErrorCode`] decides both the machine-readable code in the response body and
//! the HTTP status, so client faults (bad profile input) and server faults (the
//! classifier failing) stay distinguishable.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "http-response")]
mod http_response;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input value outside its enumerated domain
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Required request field absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Request body is not the expected shape
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric value outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    /// Request body exceeds the configured limit
    #[serde(rename = "PAYLOAD_TOO_LARGE")]
    PayloadTooLarge = 3004,

    // Resource Management (4000-4999)
    /// Requested route or resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Inference (5000-5999)
    /// The classifier could not be reached or is not loaded
    #[serde(rename = "MODEL_UNAVAILABLE")]
    ModelUnavailable = 5000,
    /// The classifier failed or produced unusable output
    #[serde(rename = "INFERENCE_FAILED")]
    InferenceFailed = 5001,

    // Configuration (6000-6999)
    /// Configuration or startup artifact is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 400,

            // 404 Not Found
            Self::ResourceNotFound => 404,

            // 413 Payload Too Large
            Self::PayloadTooLarge => 413,

            // 503 Service Unavailable
            Self::ModelUnavailable => 503,

            // 500 Internal Server Error
            Self::InferenceFailed
            | Self::ConfigInvalid
            | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::PayloadTooLarge => "The request body is too large",
            Self::ModelUnavailable => "The recommendation model is currently unavailable",
            Self::InferenceFailed => "The recommendation model failed to produce a prediction",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal server error occurred",
        }
    }

    /// Whether the error is caused by the client request rather than the server
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        self.http_status() < 500
    }
}

/// Unified error type for the application
#[derive(Debug)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Request ID for correlation, when known
    pub request_id: Option<String>,
    /// Additional structured context
    pub details: serde_json::Value,
    /// Source error for error chaining
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Add a request ID to the error
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing required field
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required field: {field}"),
        )
        .with_details(serde_json::json!({ "field": field }))
    }

    /// Malformed request body
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Value outside its accepted range
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Request body over the size limit
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PayloadTooLarge, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Classifier unavailable
    pub fn model_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ModelUnavailable, message)
    }

    /// Classifier failure
    pub fn inference(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InferenceFailed, message)
    }

    /// Invalid configuration
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Request ID for correlation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Structured context
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                request_id: error.request_id,
                details: error.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ValueOutOfRange.http_status(), 400);
        assert_eq!(ErrorCode::PayloadTooLarge.http_status(), 413);
        assert_eq!(ErrorCode::ModelUnavailable.http_status(), 503);
        assert_eq!(ErrorCode::InferenceFailed.http_status(), 500);
    }

    #[test]
    fn test_client_error_classification() {
        assert!(ErrorCode::MissingRequiredField.is_client_error());
        assert!(!ErrorCode::InferenceFailed.is_client_error());
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::missing_field("gender").with_request_id("req-123");
        let response = ErrorResponse::from(error);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"]["code"], "MISSING_REQUIRED_FIELD");
        assert_eq!(json["error"]["request_id"], "req-123");
        assert_eq!(json["error"]["details"]["field"], "gender");
    }

    #[test]
    fn test_null_details_are_omitted() {
        let response = ErrorResponse::from(AppError::inference("boom"));
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
        assert!(!json.contains("request_id"));
    }
}
