// ABOUTME: Error types for the recommendation pipeline
// ABOUTME: Separates client-fault validation errors from server-fault inference and artifact errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pipeline error taxonomy.
//!
//! - [`InputValidationError`] is always the caller's fault and maps to HTTP 400.
//! - [`InferenceError`] is always the server's fault and maps to HTTP 5xx.
//! - [`ArtifactError`] only occurs while loading startup artifacts.

use sportrec_core::errors::AppError;
use std::path::PathBuf;
use thiserror::Error;

/// Invalid or incomplete profile input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputValidationError {
    /// Value outside an enumerated field's domain
    #[error("Unknown value '{value}' for field '{field}' (expected one of: {})", .expected.join(", "))]
    UnknownValue {
        /// Request field name
        field: &'static str,
        /// Value that was supplied
        value: String,
        /// Accepted values
        expected: Vec<&'static str>,
    },

    /// Age below the first bucket
    #[error("Age {age} is below the minimum supported age of {minimum}")]
    AgeBelowMinimum {
        /// Age that was supplied
        age: i64,
        /// Lowest accepted age
        minimum: i64,
    },

    /// Required field absent from the request
    #[error("Missing required field: {field}")]
    MissingField {
        /// Request field name
        field: String,
    },

    /// Request body could not be interpreted as a profile
    #[error("Malformed request: {reason}")]
    MalformedRequest {
        /// Parser diagnostic
        reason: String,
    },
}

/// Failure while invoking or interpreting the classifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    /// Classifier not loaded or not reachable
    #[error("Classifier unavailable: {0}")]
    ModelUnavailable(String),

    /// A named input vector does not have the width the classifier expects
    #[error("Input '{input}' has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        /// Model input name
        input: &'static str,
        /// Expected width
        expected: usize,
        /// Actual width
        actual: usize,
    },

    /// A named output does not have the expected number of classes
    #[error("Output '{output}' has {actual} values, expected {expected}")]
    OutputShapeMismatch {
        /// Model output name
        output: &'static str,
        /// Expected width
        expected: usize,
        /// Actual width
        actual: usize,
    },

    /// Output values that cannot be interpreted as probabilities
    #[error("Output '{output}' is invalid: {reason}")]
    InvalidOutput {
        /// Model output name
        output: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Error reported by the classifier backend
    #[error("Classifier backend error: {0}")]
    Backend(String),
}

/// Any failure of a single recommendation request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Client fault
    #[error(transparent)]
    Input(#[from] InputValidationError),

    /// Server fault
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Failure while loading vocabularies or the classifier at startup
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Artifact file could not be read
    #[error("Failed to read artifact {}: {source}", .path.display())]
    Io {
        /// Artifact path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not valid JSON of the expected shape
    #[error("Failed to parse artifact {}: {source}", .path.display())]
    Json {
        /// Artifact path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Vocabulary with no tags
    #[error("Vocabulary '{name}' is empty")]
    EmptyVocabulary {
        /// Vocabulary name
        name: String,
    },

    /// Vocabulary listing the same tag twice
    #[error("Vocabulary '{name}' contains duplicate tag '{tag}'")]
    DuplicateTag {
        /// Vocabulary name
        name: String,
        /// Repeated tag
        tag: String,
    },

    /// Classifier artifact with inconsistent layer shapes
    #[error("Invalid classifier artifact: {0}")]
    InvalidModel(String),

    /// Classifier input width disagrees with the vocabularies
    #[error("Classifier expects sports input of width {model}, vocabularies produce {features}")]
    FeatureDimensionMismatch {
        /// Width declared by the classifier
        model: usize,
        /// Width produced by the feature builder
        features: usize,
    },
}

impl From<InputValidationError> for AppError {
    fn from(error: InputValidationError) -> Self {
        match &error {
            InputValidationError::UnknownValue {
                field,
                value,
                expected,
            } => Self::invalid_input(error.to_string()).with_details(serde_json::json!({
                "field": field,
                "value": value,
                "expected": expected,
            })),
            InputValidationError::AgeBelowMinimum { age, minimum } => {
                Self::value_out_of_range(error.to_string()).with_details(serde_json::json!({
                    "field": "age",
                    "value": age,
                    "minimum": minimum,
                }))
            }
            InputValidationError::MissingField { field } => Self::missing_field(field.clone()),
            InputValidationError::MalformedRequest { .. } => Self::invalid_format(error.to_string()),
        }
    }
}

impl From<InferenceError> for AppError {
    fn from(error: InferenceError) -> Self {
        match &error {
            InferenceError::ModelUnavailable(_) => Self::model_unavailable(error.to_string()),
            _ => Self::inference(error.to_string()),
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(error: PipelineError) -> Self {
        match error {
            PipelineError::Input(e) => e.into(),
            PipelineError::Inference(e) => e.into(),
        }
    }
}

impl From<ArtifactError> for AppError {
    fn from(error: ArtifactError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}
