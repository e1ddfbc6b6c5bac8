// ABOUTME: Enumerated profile domains and the validated user fitness profile
// ABOUTME: Parses raw request strings into typed domains, rejecting anything outside them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! User profile types.
//!
//! Every enumerated request field has a closed domain type. The position of a
//! variant in [`CategoricalDomain::VALUES`] is its integer code, which must match the
//! code used when the classifier was trained. Reordering `VALUES` silently corrupts
//! predictions.

use crate::errors::InputValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A closed set of request values with a fixed integer code per value
pub trait CategoricalDomain: Copy + Sized + 'static {
    /// Request field name, used in error messages
    const FIELD: &'static str;

    /// All values in code order
    const VALUES: &'static [Self];

    /// Canonical wire representation
    fn as_str(self) -> &'static str;

    /// Integer code of this value: the variant's declaration index, which is also
    /// its position in [`CategoricalDomain::VALUES`]
    fn code(self) -> u8;

    /// Reverse lookup of a code
    #[must_use]
    fn from_code(code: u8) -> Option<Self> {
        Self::VALUES.get(usize::from(code)).copied()
    }

    /// Canonical wire values in code order
    #[must_use]
    fn wire_values() -> Vec<&'static str> {
        Self::VALUES.iter().map(|v| v.as_str()).collect()
    }

    /// Parse a wire value, rejecting anything outside the domain
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::UnknownValue`] when `raw` is not a member of the domain
    fn parse(raw: &str) -> Result<Self, InputValidationError> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str() == raw)
            .ok_or_else(|| InputValidationError::UnknownValue {
                field: Self::FIELD,
                value: raw.to_owned(),
                expected: Self::wire_values(),
            })
    }
}

/// Biological sex used by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    /// Female
    Female,
    /// Male
    Male,
}

impl CategoricalDomain for Gender {
    const FIELD: &'static str = "gender";
    const VALUES: &'static [Self] = &[Self::Female, Self::Male];

    fn code(self) -> u8 {
        self as u8
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

/// Preferred training location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacePreference {
    /// Indoor facilities
    Indoor,
    /// Outdoors
    Outdoor,
}

impl CategoricalDomain for PlacePreference {
    const FIELD: &'static str = "placePreference";
    const VALUES: &'static [Self] = &[Self::Indoor, Self::Outdoor];

    fn code(self) -> u8 {
        self as u8
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
        }
    }
}

/// Whether the user trains alone or in company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialPreference {
    /// Solo training
    Alone,
    /// Group or partner training
    WithOthers,
}

impl CategoricalDomain for SocialPreference {
    const FIELD: &'static str = "socialPreference";
    const VALUES: &'static [Self] = &[Self::Alone, Self::WithOthers];

    fn code(self) -> u8 {
        self as u8
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Alone => "alone",
            Self::WithOthers => "with-others",
        }
    }
}

/// Equipment budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Equipment {
    /// Low budget
    Cheap,
    /// Mid budget
    Medium,
    /// High budget
    Expensive,
}

impl CategoricalDomain for Equipment {
    const FIELD: &'static str = "equipment";
    const VALUES: &'static [Self] = &[Self::Cheap, Self::Medium, Self::Expensive];

    fn code(self) -> u8 {
        self as u8
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Cheap => "cheap",
            Self::Medium => "medium",
            Self::Expensive => "expensive",
        }
    }
}

/// Session length bucket
///
/// Used both for the user's available time (input) and for the recommended
/// session duration (output); both sides share the same five buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvailableTime {
    /// Under 15 minutes
    #[serde(rename = "<15 minutes")]
    UnderFifteen,
    /// 15 to 30 minutes
    #[serde(rename = "15-30 minutes")]
    FifteenToThirty,
    /// 30 to 45 minutes
    #[serde(rename = "30-45 minutes")]
    ThirtyToFortyFive,
    /// 45 to 60 minutes
    #[serde(rename = "45-60 minutes")]
    FortyFiveToSixty,
    /// Over an hour
    #[serde(rename = ">60 minutes")]
    OverSixty,
}

impl CategoricalDomain for AvailableTime {
    const FIELD: &'static str = "availableTime";
    const VALUES: &'static [Self] = &[
        Self::UnderFifteen,
        Self::FifteenToThirty,
        Self::ThirtyToFortyFive,
        Self::FortyFiveToSixty,
        Self::OverSixty,
    ];

    fn code(self) -> u8 {
        self as u8
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::UnderFifteen => "<15 minutes",
            Self::FifteenToThirty => "15-30 minutes",
            Self::ThirtyToFortyFive => "30-45 minutes",
            Self::FortyFiveToSixty => "45-60 minutes",
            Self::OverSixty => ">60 minutes",
        }
    }
}

/// Self-reported fitness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessLevel {
    /// Rarely active
    Unfit,
    /// Moderately active
    Average,
    /// Regularly active
    Good,
}

impl CategoricalDomain for FitnessLevel {
    const FIELD: &'static str = "fitnessLevel";
    const VALUES: &'static [Self] = &[Self::Unfit, Self::Average, Self::Good];

    fn code(self) -> u8 {
        self as u8
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Unfit => "unfit",
            Self::Average => "average",
            Self::Good => "good",
        }
    }
}

macro_rules! impl_display_via_wire {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

impl_display_via_wire!(
    Gender,
    PlacePreference,
    SocialPreference,
    Equipment,
    AvailableTime,
    FitnessLevel
);

/// Raw profile as received on the wire
///
/// Enumerated fields are kept as strings so that an out-of-domain value produces a
/// named [`InputValidationError`] instead of a generic deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    /// Age in years
    pub age: i64,
    /// `female` or `male`
    pub gender: String,
    /// `indoor` or `outdoor`
    pub place_preference: String,
    /// `alone` or `with-others`
    pub social_preference: String,
    /// `cheap`, `medium`, or `expensive`
    pub equipment: String,
    /// One of the five session length buckets
    pub available_time: String,
    /// `unfit`, `average`, or `good`
    pub fitness_level: String,
    /// Free-form motivation tags
    pub motivation: Vec<String>,
    /// Free-form disease history tags
    pub disease_history: Vec<String>,
}

/// Validated user fitness profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Age in years; bucketed by the categorical encoder
    pub age: i64,
    /// Gender
    pub gender: Gender,
    /// Training location preference
    pub place_preference: PlacePreference,
    /// Social preference
    pub social_preference: SocialPreference,
    /// Equipment budget
    pub equipment: Equipment,
    /// Time available per session
    pub available_time: AvailableTime,
    /// Fitness level
    pub fitness_level: FitnessLevel,
    /// Motivation tags, deduplicated
    pub motivation: BTreeSet<String>,
    /// Disease history tags, deduplicated
    pub disease_history: BTreeSet<String>,
}

impl TryFrom<ProfileRequest> for UserProfile {
    type Error = InputValidationError;

    fn try_from(request: ProfileRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            age: request.age,
            gender: Gender::parse(&request.gender)?,
            place_preference: PlacePreference::parse(&request.place_preference)?,
            social_preference: SocialPreference::parse(&request.social_preference)?,
            equipment: Equipment::parse(&request.equipment)?,
            available_time: AvailableTime::parse(&request.available_time)?,
            fitness_level: FitnessLevel::parse(&request.fitness_level)?,
            motivation: request.motivation.into_iter().collect(),
            disease_history: request.disease_history.into_iter().collect(),
        })
    }
}
