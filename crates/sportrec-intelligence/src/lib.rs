// ABOUTME: Recommendation pipeline crate: profile encoding, inference adapter, output decoding
// ABOUTME: Converts a validated fitness profile into sport, duration, and frequency recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Sportrec Intelligence
//!
//! The pipeline between a raw profile request and the trained classifier:
//!
//! ```text
//! ProfileRequest -> UserProfile -> CategoricalEncoder / MultiLabelEncoder
//!     -> FeatureVectorBuilder -> InferenceAdapter -> OutputDecoder -> ResponseAssembler
//! ```
//!
//! All process-wide state (vocabularies, classifier, label tables) lives in an
//! immutable [`RecommendationPipeline`] built once at startup and shared by reference.

/// Error types for validation, inference, and artifact loading
pub mod errors;

/// Enumerated profile domains and the validated user profile
pub mod profile;

/// Categorical and multi-label encoders
pub mod encoding;

/// Fixed-order feature vector assembly
pub mod features;

/// Classifier contract and the inference adapter around it
pub mod inference;

/// Dense feed-forward classifier loaded from an exported JSON artifact
pub mod dense;

/// Decoding of raw model outputs into labels
pub mod decoder;

/// Response packaging
pub mod response;

/// Process-wide recommendation context
pub mod pipeline;

pub use decoder::{DecodedRecommendation, OutputDecoder, Sport, WeeklyFrequency};
pub use dense::DenseClassifier;
pub use encoding::{CategoricalEncoder, EncodedProfile, MultiLabelEncoder, Vocabulary};
pub use errors::{ArtifactError, InferenceError, InputValidationError, PipelineError};
pub use features::{FeatureVectorBuilder, FeatureVectors};
pub use inference::{InferenceAdapter, InferenceMode, ModelOutputs, SportsClassifier};
pub use pipeline::{ArtifactPaths, ModelMetadata, RecommendationPipeline};
pub use profile::{ProfileRequest, UserProfile};
pub use response::{RecommendationResult, ResponseAssembler};
