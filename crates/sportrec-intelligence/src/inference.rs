// ABOUTME: Classifier contract and the inference adapter wrapping the trained model
// ABOUTME: Validates input and output shapes and optionally serializes calls behind a mutex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Inference Adapter
//!
//! The trained classifier is an opaque collaborator reached only through
//! [`SportsClassifier::predict`]. The adapter owns one loaded classifier for the
//! process lifetime and checks every call at the boundary:
//!
//! - `sportsInput` must have the width the classifier declares
//! - `sportsPred` must have 15 values, `waktuPred` 5, `weeklyPred` must lie in `[0, 1]`
//! - every value must be finite
//!
//! Thread safety of a classifier is never assumed. Implementations that are not
//! `Sync`, or not safe to call concurrently, must be installed with
//! [`InferenceAdapter::serialized`], which wraps every call in a mutex. There are
//! no retries: any failure fails the request.

use crate::errors::InferenceError;
use crate::features::{FeatureVectors, SPORTS_INPUT};
use serde::Serialize;
use std::fmt;
use std::sync::Mutex;
use tracing::debug;

/// Number of sport classes produced by the sports head
pub const SPORT_CLASSES: usize = 15;
/// Number of duration classes produced by the duration head
pub const DURATION_CLASSES: usize = 5;

/// Name of the sports output
pub const SPORTS_PRED: &str = "sportsPred";
/// Name of the duration output
pub const WAKTU_PRED: &str = "waktuPred";
/// Name of the weekly frequency output
pub const WEEKLY_PRED: &str = "weeklyPred";

/// Raw classifier outputs for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelOutputs {
    /// 15-way sport distribution
    pub sports_pred: Vec<f32>,
    /// 5-way duration distribution
    pub waktu_pred: Vec<f32>,
    /// Probability of the higher weekly frequency
    pub weekly_pred: f32,
}

/// A trained multi-input, multi-output classifier
pub trait SportsClassifier: Send {
    /// Run the classifier on one request's inputs
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    fn predict(&self, inputs: &FeatureVectors) -> Result<ModelOutputs, InferenceError>;

    /// Width of `sportsInput` the classifier was trained on, when it can tell
    fn sports_input_dimension(&self) -> Option<usize> {
        None
    }

    /// Short description for logs and metadata
    fn describe(&self) -> String {
        "classifier".to_owned()
    }
}

/// How calls reach the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InferenceMode {
    /// Called concurrently from any request
    Concurrent,
    /// Every call holds an exclusive lock
    Serialized,
}

impl fmt::Display for InferenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concurrent => write!(f, "concurrent"),
            Self::Serialized => write!(f, "serialized"),
        }
    }
}

enum ClassifierHandle {
    Shared(Box<dyn SportsClassifier + Sync>),
    Exclusive(Mutex<Box<dyn SportsClassifier>>),
}

/// Process-wide wrapper around the loaded classifier
pub struct InferenceAdapter {
    handle: ClassifierHandle,
    sports_dimension: Option<usize>,
    description: String,
}

impl fmt::Debug for InferenceAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceAdapter")
            .field("mode", &self.mode())
            .field("sports_dimension", &self.sports_dimension)
            .field("description", &self.description)
            .finish()
    }
}

impl InferenceAdapter {
    /// Install a classifier that is safe to call from several threads at once
    pub fn concurrent(classifier: impl SportsClassifier + Sync + 'static) -> Self {
        let sports_dimension = classifier.sports_input_dimension();
        let description = classifier.describe();
        Self {
            handle: ClassifierHandle::Shared(Box::new(classifier)),
            sports_dimension,
            description,
        }
    }

    /// Install a classifier whose calls must not overlap
    pub fn serialized(classifier: impl SportsClassifier + 'static) -> Self {
        let sports_dimension = classifier.sports_input_dimension();
        let description = classifier.describe();
        Self {
            handle: ClassifierHandle::Exclusive(Mutex::new(Box::new(classifier))),
            sports_dimension,
            description,
        }
    }

    /// Install a thread-safe classifier in the requested mode
    pub fn with_mode(classifier: impl SportsClassifier + Sync + 'static, mode: InferenceMode) -> Self {
        match mode {
            InferenceMode::Concurrent => Self::concurrent(classifier),
            InferenceMode::Serialized => Self::serialized(classifier),
        }
    }

    /// Call mode
    #[must_use]
    pub const fn mode(&self) -> InferenceMode {
        match self.handle {
            ClassifierHandle::Shared(_) => InferenceMode::Concurrent,
            ClassifierHandle::Exclusive(_) => InferenceMode::Serialized,
        }
    }

    /// Width of `sportsInput` declared by the classifier
    #[must_use]
    pub const fn sports_input_dimension(&self) -> Option<usize> {
        self.sports_dimension
    }

    /// Classifier description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the classifier and validate its outputs
    ///
    /// # Errors
    ///
    /// Returns an [`InferenceError`] if the inputs do not fit the classifier, the
    /// classifier fails, or its outputs have the wrong shape or non-finite values
    pub fn predict(&self, inputs: &FeatureVectors) -> Result<ModelOutputs, InferenceError> {
        if let Some(expected) = self.sports_dimension {
            if inputs.sports_input.len() != expected {
                return Err(InferenceError::DimensionMismatch {
                    input: SPORTS_INPUT,
                    expected,
                    actual: inputs.sports_input.len(),
                });
            }
        }

        let outputs = match &self.handle {
            ClassifierHandle::Shared(classifier) => classifier.predict(inputs)?,
            ClassifierHandle::Exclusive(classifier) => {
                let guard = classifier.lock().map_err(|_| {
                    InferenceError::ModelUnavailable(
                        "classifier lock poisoned by an earlier failure".to_owned(),
                    )
                })?;
                guard.predict(inputs)?
            }
        };

        validate_outputs(&outputs)?;
        debug!(
            sports_pred = ?outputs.sports_pred,
            waktu_pred = ?outputs.waktu_pred,
            weekly_pred = outputs.weekly_pred,
            "Classifier outputs"
        );
        Ok(outputs)
    }
}

fn validate_outputs(outputs: &ModelOutputs) -> Result<(), InferenceError> {
    validate_distribution(SPORTS_PRED, &outputs.sports_pred, SPORT_CLASSES)?;
    validate_distribution(WAKTU_PRED, &outputs.waktu_pred, DURATION_CLASSES)?;
    validate_probability(WEEKLY_PRED, outputs.weekly_pred)
}

/// Checks that a scalar lies in `[0, 1]`; NaN fails the range check
pub(crate) fn validate_probability(output: &'static str, value: f32) -> Result<(), InferenceError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(InferenceError::InvalidOutput {
            output,
            reason: format!("probability {value} outside [0, 1]"),
        })
    }
}

/// Checks class count and that every value is finite
pub(crate) fn validate_distribution(
    output: &'static str,
    values: &[f32],
    expected: usize,
) -> Result<(), InferenceError> {
    if values.len() != expected {
        return Err(InferenceError::OutputShapeMismatch {
            output,
            expected,
            actual: values.len(),
        });
    }
    if let Some(position) = values.iter().position(|v| !v.is_finite()) {
        return Err(InferenceError::InvalidOutput {
            output,
            reason: format!("non-finite value at index {position}"),
        });
    }
    Ok(())
}
