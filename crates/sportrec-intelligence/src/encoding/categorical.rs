// ABOUTME: Categorical encoder for enumerated profile fields and the bucketed age field
// ABOUTME: Maps raw values to the small integer codes the classifier was trained on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::InputValidationError;
use crate::profile::{
    AvailableTime, CategoricalDomain, Equipment, FitnessLevel, Gender, PlacePreference,
    SocialPreference, UserProfile,
};
use serde::Serialize;

/// Lowest age with a defined bucket
pub const MIN_AGE: i64 = 15;

/// Age range buckets, in code order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AgeBucket {
    /// 15 to 18
    #[serde(rename = "15 to 18")]
    Teen,
    /// 19 to 25
    #[serde(rename = "19 to 25")]
    YoungAdult,
    /// 26 to 30
    #[serde(rename = "26 to 30")]
    Adult,
    /// 31 to 39
    #[serde(rename = "31 to 39")]
    Thirties,
    /// 40 and above
    #[serde(rename = "40 and above")]
    FortyPlus,
}

impl AgeBucket {
    /// All buckets in code order
    pub const ALL: [Self; 5] = [
        Self::Teen,
        Self::YoungAdult,
        Self::Adult,
        Self::Thirties,
        Self::FortyPlus,
    ];

    /// Bucket an age in years
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::AgeBelowMinimum`] for ages under [`MIN_AGE`]
    pub fn from_age(age: i64) -> Result<Self, InputValidationError> {
        match age {
            i64::MIN..=14 => Err(InputValidationError::AgeBelowMinimum {
                age,
                minimum: MIN_AGE,
            }),
            15..=18 => Ok(Self::Teen),
            19..=25 => Ok(Self::YoungAdult),
            26..=30 => Ok(Self::Adult),
            31..=39 => Ok(Self::Thirties),
            40.. => Ok(Self::FortyPlus),
        }
    }

    /// Integer code of this bucket
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable range
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Teen => "15 to 18",
            Self::YoungAdult => "19 to 25",
            Self::Adult => "26 to 30",
            Self::Thirties => "31 to 39",
            Self::FortyPlus => "40 and above",
        }
    }
}

/// Enumerated profile fields handled by the categorical encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    /// `gender`
    Gender,
    /// `placePreference`
    PlacePreference,
    /// `socialPreference`
    SocialPreference,
    /// `equipment`
    Equipment,
    /// `availableTime`
    AvailableTime,
    /// `fitnessLevel`
    FitnessLevel,
}

impl CategoricalField {
    /// Every enumerated field
    pub const ALL: [Self; 6] = [
        Self::Gender,
        Self::PlacePreference,
        Self::SocialPreference,
        Self::Equipment,
        Self::AvailableTime,
        Self::FitnessLevel,
    ];

    /// Request field name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gender => Gender::FIELD,
            Self::PlacePreference => PlacePreference::FIELD,
            Self::SocialPreference => SocialPreference::FIELD,
            Self::Equipment => Equipment::FIELD,
            Self::AvailableTime => AvailableTime::FIELD,
            Self::FitnessLevel => FitnessLevel::FIELD,
        }
    }

    /// Accepted wire values in code order
    #[must_use]
    pub fn domain(self) -> Vec<&'static str> {
        match self {
            Self::Gender => Gender::wire_values(),
            Self::PlacePreference => PlacePreference::wire_values(),
            Self::SocialPreference => SocialPreference::wire_values(),
            Self::Equipment => Equipment::wire_values(),
            Self::AvailableTime => AvailableTime::wire_values(),
            Self::FitnessLevel => FitnessLevel::wire_values(),
        }
    }
}

/// Integer codes for every scalar profile field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodedProfile {
    /// Age bucket code
    pub age: u8,
    /// Gender code
    pub gender: u8,
    /// Place preference code
    pub location: u8,
    /// Social preference code
    pub social: u8,
    /// Equipment code
    pub equipment: u8,
    /// Available time code, fed to the duration head
    pub available_time: u8,
    /// Fitness level code, fed to the weekly frequency head
    pub fitness_level: u8,
}

/// Stateless encoder over the fixed categorical tables
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoricalEncoder;

impl CategoricalEncoder {
    /// Encode a raw value of an enumerated field
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::UnknownValue`] when the value is outside the field's domain
    pub fn encode(field: CategoricalField, raw: &str) -> Result<u8, InputValidationError> {
        Ok(match field {
            CategoricalField::Gender => Gender::parse(raw)?.code(),
            CategoricalField::PlacePreference => PlacePreference::parse(raw)?.code(),
            CategoricalField::SocialPreference => SocialPreference::parse(raw)?.code(),
            CategoricalField::Equipment => Equipment::parse(raw)?.code(),
            CategoricalField::AvailableTime => AvailableTime::parse(raw)?.code(),
            CategoricalField::FitnessLevel => FitnessLevel::parse(raw)?.code(),
        })
    }

    /// Reverse lookup of a code to its wire value
    #[must_use]
    pub fn decode(field: CategoricalField, code: u8) -> Option<&'static str> {
        match field {
            CategoricalField::Gender => Gender::from_code(code).map(Gender::as_str),
            CategoricalField::PlacePreference => {
                PlacePreference::from_code(code).map(PlacePreference::as_str)
            }
            CategoricalField::SocialPreference => {
                SocialPreference::from_code(code).map(SocialPreference::as_str)
            }
            CategoricalField::Equipment => Equipment::from_code(code).map(Equipment::as_str),
            CategoricalField::AvailableTime => {
                AvailableTime::from_code(code).map(AvailableTime::as_str)
            }
            CategoricalField::FitnessLevel => {
                FitnessLevel::from_code(code).map(FitnessLevel::as_str)
            }
        }
    }

    /// Encode an age through the range buckets
    ///
    /// # Errors
    ///
    /// Returns [`InputValidationError::AgeBelowMinimum`] for ages under [`MIN_AGE`]
    pub fn encode_age(age: i64) -> Result<u8, InputValidationError> {
        AgeBucket::from_age(age).map(AgeBucket::code)
    }

    /// Encode every scalar field of a validated profile
    ///
    /// # Errors
    ///
    /// Returns an error when the age has no bucket
    pub fn encode_profile(profile: &UserProfile) -> Result<EncodedProfile, InputValidationError> {
        Ok(EncodedProfile {
            age: Self::encode_age(profile.age)?,
            gender: profile.gender.code(),
            location: profile.place_preference.code(),
            social: profile.social_preference.code(),
            equipment: profile.equipment.code(),
            available_time: profile.available_time.code(),
            fitness_level: profile.fitness_level.code(),
        })
    }
}
