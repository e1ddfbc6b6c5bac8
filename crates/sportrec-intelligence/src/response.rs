// ABOUTME: Response assembler packaging decoded labels into the client-facing result
// ABOUTME: Pure packaging with no transformation logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::decoder::DecodedRecommendation;
use crate::profile::CategoricalDomain;
use serde::{Deserialize, Serialize};

/// Recommendation returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    /// Exactly three distinct sports, most likely first
    pub sports_recommendations: Vec<String>,
    /// Recommended session length
    pub waktu_recommendation: String,
    /// `1x` or `2x`
    pub weekly_recommendation: String,
}

/// Packages a [`DecodedRecommendation`] as a [`RecommendationResult`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseAssembler;

impl ResponseAssembler {
    /// Convert decoded values to their labels
    #[must_use]
    pub fn assemble(decoded: &DecodedRecommendation) -> RecommendationResult {
        RecommendationResult {
            sports_recommendations: decoded
                .sports
                .iter()
                .map(|sport| sport.label().to_owned())
                .collect(),
            waktu_recommendation: decoded.duration.as_str().to_owned(),
            weekly_recommendation: decoded.weekly.label().to_owned(),
        }
    }
}
