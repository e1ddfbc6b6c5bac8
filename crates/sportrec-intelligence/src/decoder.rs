// ABOUTME: Output decoder turning raw classifier distributions into recommendation labels
// ABOUTME: Top-3 sports, argmax duration, and a fixed-threshold weekly frequency decision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Output Decoding
//!
//! - **Sport**: the 3 highest probabilities of the 15-way distribution, highest first.
//!   Equal probabilities keep the lower class index first.
//! - **Duration**: argmax of the 5-way distribution; ties go to the lower index.
//! - **Weekly frequency**: `2x` when the probability is strictly greater than 0.5,
//!   otherwise `1x`. A probability of exactly 0.5 decodes to `1x`.

use crate::errors::InferenceError;
use crate::inference::{
    validate_distribution, validate_probability, ModelOutputs, DURATION_CLASSES, SPORTS_PRED,
    SPORT_CLASSES, WAKTU_PRED, WEEKLY_PRED,
};
use crate::profile::{AvailableTime, CategoricalDomain};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of sports recommended per request
pub const TOP_SPORTS: usize = 3;

/// Weekly probability above which the higher frequency is chosen
pub const WEEKLY_THRESHOLD: f32 = 0.5;

/// Sport classes in the classifier's output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    /// Class 0
    Jogging,
    /// Class 1
    Cycling,
    /// Class 2
    Swimming,
    /// Class 3
    Yoga,
    /// Class 4
    Gym,
    /// Class 5
    Aerobics,
    /// Class 6
    Badminton,
    /// Class 7
    Basketball,
    /// Class 8
    Futsal,
    /// Class 9
    Volleyball,
    /// Class 10
    Tennis,
    /// Class 11
    #[serde(rename = "Table Tennis")]
    TableTennis,
    /// Class 12
    Hiking,
    /// Class 13
    Walking,
    /// Class 14
    Zumba,
}

impl Sport {
    /// Label table, indexed by class
    pub const ALL: [Self; SPORT_CLASSES] = [
        Self::Jogging,
        Self::Cycling,
        Self::Swimming,
        Self::Yoga,
        Self::Gym,
        Self::Aerobics,
        Self::Badminton,
        Self::Basketball,
        Self::Futsal,
        Self::Volleyball,
        Self::Tennis,
        Self::TableTennis,
        Self::Hiking,
        Self::Walking,
        Self::Zumba,
    ];

    /// Sport for a class index
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jogging => "Jogging",
            Self::Cycling => "Cycling",
            Self::Swimming => "Swimming",
            Self::Yoga => "Yoga",
            Self::Gym => "Gym",
            Self::Aerobics => "Aerobics",
            Self::Badminton => "Badminton",
            Self::Basketball => "Basketball",
            Self::Futsal => "Futsal",
            Self::Volleyball => "Volleyball",
            Self::Tennis => "Tennis",
            Self::TableTennis => "Table Tennis",
            Self::Hiking => "Hiking",
            Self::Walking => "Walking",
            Self::Zumba => "Zumba",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommended sessions per week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeeklyFrequency {
    /// Index 0
    #[serde(rename = "1x")]
    Once,
    /// Index 1
    #[serde(rename = "2x")]
    Twice,
}

impl WeeklyFrequency {
    /// Label table, indexed by class
    pub const ALL: [Self; 2] = [Self::Once, Self::Twice];

    /// Threshold decision on the classifier's probability
    #[must_use]
    pub fn from_probability(probability: f32) -> Self {
        if probability > WEEKLY_THRESHOLD {
            Self::Twice
        } else {
            Self::Once
        }
    }

    /// Class index
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Once => "1x",
            Self::Twice => "2x",
        }
    }
}

impl fmt::Display for WeeklyFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Typed decoding of one set of model outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedRecommendation {
    /// Distinct sports, most likely first
    pub sports: [Sport; TOP_SPORTS],
    /// Recommended session length
    pub duration: AvailableTime,
    /// Recommended weekly frequency
    pub weekly: WeeklyFrequency,
}

/// Indices of the `k` largest values, largest first, ties by lower index
///
/// Values are ordered by [`f32::total_cmp`], so a positive NaN ranks above every
/// number. [`OutputDecoder`] rejects non-finite distributions before ranking.
/// Returns fewer than `k` indices when `values` is shorter than `k`.
#[must_use]
pub fn top_k_indices(values: &[f32], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    // sort_by is stable, so equal values keep ascending index order
    indices.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    indices.truncate(k);
    indices
}

/// Index of the largest value, first one on ties
#[must_use]
pub fn argmax(values: &[f32]) -> Option<usize> {
    top_k_indices(values, 1).first().copied()
}

/// Stateless decoder over the fixed label tables
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputDecoder;

impl OutputDecoder {
    /// Top-3 sports of the sport distribution
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::OutputShapeMismatch`] if the distribution is not 15-way
    /// and [`InferenceError::InvalidOutput`] if it holds a NaN or infinite value
    pub fn decode_sports(distribution: &[f32]) -> Result<[Sport; TOP_SPORTS], InferenceError> {
        validate_distribution(SPORTS_PRED, distribution, SPORT_CLASSES)?;
        let picked: Vec<Sport> = top_k_indices(distribution, TOP_SPORTS)
            .into_iter()
            .filter_map(Sport::from_index)
            .collect();
        picked
            .try_into()
            .map_err(|_| InferenceError::Backend("sport label table incomplete".to_owned()))
    }

    /// Argmax duration of the duration distribution
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::OutputShapeMismatch`] if the distribution is not 5-way
    /// and [`InferenceError::InvalidOutput`] if it holds a NaN or infinite value
    pub fn decode_duration(distribution: &[f32]) -> Result<AvailableTime, InferenceError> {
        validate_distribution(WAKTU_PRED, distribution, DURATION_CLASSES)?;
        argmax(distribution)
            .and_then(|index| u8::try_from(index).ok())
            .and_then(AvailableTime::from_code)
            .ok_or_else(|| InferenceError::Backend("duration label table incomplete".to_owned()))
    }

    /// Threshold decision for the weekly frequency
    #[must_use]
    pub fn decode_weekly(probability: f32) -> WeeklyFrequency {
        WeeklyFrequency::from_probability(probability)
    }

    /// Decode all three outputs
    ///
    /// # Errors
    ///
    /// Returns an error if either distribution has the wrong number of classes or a
    /// non-finite value, or if the weekly probability is outside `[0, 1]`
    pub fn decode(outputs: &ModelOutputs) -> Result<DecodedRecommendation, InferenceError> {
        validate_probability(WEEKLY_PRED, outputs.weekly_pred)?;
        Ok(DecodedRecommendation {
            sports: Self::decode_sports(&outputs.sports_pred)?,
            duration: Self::decode_duration(&outputs.waktu_pred)?,
            weekly: Self::decode_weekly(outputs.weekly_pred),
        })
    }
}
