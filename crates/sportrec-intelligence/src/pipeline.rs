// ABOUTME: Immutable recommendation context built once at startup and shared across requests
// ABOUTME: Runs encode, inference, decode, and assembly for a single profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation pipeline.
//!
//! [`RecommendationPipeline`] holds everything that lives for the process lifetime:
//! both vocabularies and the inference adapter. It is read-only after construction
//! and is passed by reference into request handlers. Per-request values
//! ([`FeatureVectors`], [`ModelOutputs`](crate::inference::ModelOutputs)) never outlive
//! a call to [`RecommendationPipeline::recommend`].

use crate::decoder::{OutputDecoder, Sport, WeeklyFrequency};
use crate::dense::DenseClassifier;
use crate::encoding::{CategoricalEncoder, CategoricalField, MultiLabelEncoder, Vocabulary};
use crate::errors::{ArtifactError, PipelineError};
use crate::features::{FeatureVectorBuilder, FeatureVectors};
use crate::inference::{InferenceAdapter, InferenceMode};
use crate::profile::{AvailableTime, CategoricalDomain, UserProfile};
use crate::response::{RecommendationResult, ResponseAssembler};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Vocabulary name for motivation tags
pub const MOTIVATION_VOCABULARY: &str = "motivation";
/// Vocabulary name for disease history tags
pub const HEALTH_VOCABULARY: &str = "diseaseHistory";

/// Locations of the startup artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Classifier weight file
    pub model: PathBuf,
    /// Motivation vocabulary
    pub motivation_vocabulary: PathBuf,
    /// Disease history vocabulary
    pub health_vocabulary: PathBuf,
}

/// Read-only description of the loaded model, for discovery endpoints
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetadata {
    /// Classifier description
    pub classifier: String,
    /// Call mode of the inference adapter
    pub inference_mode: InferenceMode,
    /// D_s
    pub sports_input_dimension: usize,
    /// Known motivation tags in column order
    pub motivation_tags: Vec<String>,
    /// Known disease history tags in column order
    pub disease_history_tags: Vec<String>,
    /// Accepted values of each enumerated request field
    pub categorical_domains: BTreeMap<&'static str, Vec<&'static str>>,
    /// Sport labels in class order
    pub sport_labels: Vec<&'static str>,
    /// Duration labels in class order
    pub duration_labels: Vec<&'static str>,
    /// Weekly frequency labels in class order
    pub weekly_labels: Vec<&'static str>,
}

/// Process-wide recommendation context
#[derive(Debug)]
pub struct RecommendationPipeline {
    motivation: MultiLabelEncoder,
    health: MultiLabelEncoder,
    builder: FeatureVectorBuilder,
    adapter: InferenceAdapter,
}

impl RecommendationPipeline {
    /// Assemble a pipeline from loaded parts
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::FeatureDimensionMismatch`] when the classifier declares a
    /// `sportsInput` width different from `K_m + K_h + 5`
    pub fn new(
        motivation: Vocabulary,
        health: Vocabulary,
        adapter: InferenceAdapter,
    ) -> Result<Self, ArtifactError> {
        let builder = FeatureVectorBuilder::new(motivation.len(), health.len());
        if let Some(model) = adapter.sports_input_dimension() {
            if model != builder.sports_dimension() {
                return Err(ArtifactError::FeatureDimensionMismatch {
                    model,
                    features: builder.sports_dimension(),
                });
            }
        }

        Ok(Self {
            motivation: MultiLabelEncoder::new(motivation),
            health: MultiLabelEncoder::new(health),
            builder,
            adapter,
        })
    }

    /// Load vocabularies and the dense classifier from disk
    ///
    /// # Errors
    ///
    /// Returns an error if any artifact is missing or invalid, or if the artifacts
    /// disagree on the feature width
    pub fn from_artifacts(paths: &ArtifactPaths, mode: InferenceMode) -> Result<Self, ArtifactError> {
        let motivation =
            Vocabulary::from_json_file(MOTIVATION_VOCABULARY, &paths.motivation_vocabulary)?;
        let health = Vocabulary::from_json_file(HEALTH_VOCABULARY, &paths.health_vocabulary)?;
        let classifier = DenseClassifier::from_json_file(&paths.model)?;
        let pipeline = Self::new(motivation, health, InferenceAdapter::with_mode(classifier, mode))?;

        info!(
            motivation_tags = pipeline.motivation.width(),
            health_tags = pipeline.health.width(),
            sports_input_dimension = pipeline.sports_input_dimension(),
            inference_mode = %mode,
            "Recommendation pipeline loaded from {}",
            paths.model.display()
        );
        Ok(pipeline)
    }

    /// D_s
    #[must_use]
    pub const fn sports_input_dimension(&self) -> usize {
        self.builder.sports_dimension()
    }

    /// Inference call mode
    #[must_use]
    pub const fn inference_mode(&self) -> InferenceMode {
        self.adapter.mode()
    }

    /// Encode a profile into the classifier's three named inputs
    ///
    /// # Errors
    ///
    /// Returns a validation error for an age without a bucket, or an inference error
    /// if the assembled vectors do not have the contracted width
    pub fn encode(&self, profile: &UserProfile) -> Result<FeatureVectors, PipelineError> {
        let codes = CategoricalEncoder::encode_profile(profile)?;
        let motivation = self.motivation.encode(&profile.motivation);
        let health = self.health.encode(&profile.disease_history);

        if !motivation.unknown.is_empty() || !health.unknown.is_empty() {
            debug!(
                unknown_motivation = ?motivation.unknown,
                unknown_disease_history = ?health.unknown,
                "Dropped tags not present in the fitted vocabularies"
            );
        }
        debug!(?codes, "Encoded categorical fields");

        Ok(self
            .builder
            .build(&codes, &motivation.indicators, &health.indicators)?)
    }

    /// Produce recommendations for one profile
    ///
    /// Either all three recommendations are returned or the call fails; there is no
    /// partial result.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Input`] for invalid profiles and
    /// [`PipelineError::Inference`] when the classifier fails or misbehaves
    pub fn recommend(&self, profile: &UserProfile) -> Result<RecommendationResult, PipelineError> {
        let features = self.encode(profile)?;
        let outputs = self.adapter.predict(&features)?;
        let decoded = OutputDecoder::decode(&outputs)?;
        let result = ResponseAssembler::assemble(&decoded);

        info!(
            sports = ?result.sports_recommendations,
            duration = %result.waktu_recommendation,
            weekly = %result.weekly_recommendation,
            "Recommendation produced"
        );
        Ok(result)
    }

    /// Describe the loaded model
    #[must_use]
    pub fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            classifier: self.adapter.description().to_owned(),
            inference_mode: self.adapter.mode(),
            sports_input_dimension: self.sports_input_dimension(),
            motivation_tags: self.motivation.vocabulary().tags().to_vec(),
            disease_history_tags: self.health.vocabulary().tags().to_vec(),
            categorical_domains: CategoricalField::ALL
                .iter()
                .map(|field| (field.name(), field.domain()))
                .collect(),
            sport_labels: Sport::ALL.iter().map(|sport| sport.label()).collect(),
            duration_labels: AvailableTime::wire_values(),
            weekly_labels: WeeklyFrequency::ALL.iter().map(|w| w.label()).collect(),
        }
    }
}
