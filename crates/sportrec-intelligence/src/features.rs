// ABOUTME: Feature vector builder assembling encoded fields into the classifier's named inputs
// ABOUTME: Owns the column order contract shared with model training
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feature vector assembly.
//!
//! `sportsInput` layout, in this exact order:
//!
//! ```text
//! [ motivation indicators (K_m) | health indicators (K_h) | age | gender | location | social | equipment ]
//! ```
//!
//! The order must match the one used when the classifier was trained. Nothing at
//! this layer can detect a wrong order; only widths are checked.

use crate::encoding::EncodedProfile;
use crate::errors::InferenceError;
use serde::Serialize;

/// Number of scalar categorical columns appended after the indicator blocks
pub const CATEGORICAL_COLUMNS: usize = 5;

/// Name of the sports branch input
pub const SPORTS_INPUT: &str = "sportsInput";
/// Name of the duration branch input
pub const WAKTU_INPUT: &str = "waktuInput";
/// Name of the weekly frequency branch input
pub const WEEKLY_INPUT: &str = "weeklyInput";

/// The three named classifier inputs for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVectors {
    /// Shape (1, D_s)
    pub sports_input: Vec<f32>,
    /// Shape (1, 1): available time code
    pub waktu_input: f32,
    /// Shape (1, 1): fitness level code
    pub weekly_input: f32,
}

impl FeatureVectors {
    /// Shape of `sportsInput` as a single-row batch
    #[must_use]
    pub fn sports_shape(&self) -> (usize, usize) {
        (1, self.sports_input.len())
    }
}

/// Builds [`FeatureVectors`] of a fixed width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureVectorBuilder {
    motivation_width: usize,
    health_width: usize,
}

impl FeatureVectorBuilder {
    /// Builder for vocabularies of size `K_m` and `K_h`
    #[must_use]
    pub const fn new(motivation_width: usize, health_width: usize) -> Self {
        Self {
            motivation_width,
            health_width,
        }
    }

    /// D_s = K_m + K_h + 5
    #[must_use]
    pub const fn sports_dimension(&self) -> usize {
        self.motivation_width + self.health_width + CATEGORICAL_COLUMNS
    }

    /// Concatenate encoded fields in contract order
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::DimensionMismatch`] when an indicator vector or the
    /// assembled `sportsInput` does not have the expected width
    pub fn build(
        &self,
        codes: &EncodedProfile,
        motivation: &[u8],
        health: &[u8],
    ) -> Result<FeatureVectors, InferenceError> {
        check_width("motivation", self.motivation_width, motivation.len())?;
        check_width("diseaseHistory", self.health_width, health.len())?;

        let mut sports_input = Vec::with_capacity(self.sports_dimension());
        sports_input.extend(motivation.iter().map(|&bit| f32::from(bit)));
        sports_input.extend(health.iter().map(|&bit| f32::from(bit)));
        sports_input.extend(
            [
                codes.age,
                codes.gender,
                codes.location,
                codes.social,
                codes.equipment,
            ]
            .map(f32::from),
        );

        check_width(SPORTS_INPUT, self.sports_dimension(), sports_input.len())?;

        Ok(FeatureVectors {
            sports_input,
            waktu_input: f32::from(codes.available_time),
            weekly_input: f32::from(codes.fitness_level),
        })
    }
}

fn check_width(input: &'static str, expected: usize, actual: usize) -> Result<(), InferenceError> {
    if expected == actual {
        Ok(())
    } else {
        Err(InferenceError::DimensionMismatch {
            input,
            expected,
            actual,
        })
    }
}
