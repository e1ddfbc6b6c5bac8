// ABOUTME: Encoders turning profile fields into integer codes and indicator vectors
// ABOUTME: Groups the categorical encoder and the vocabulary-backed multi-label encoder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Enumerated and bucketed scalar fields
pub mod categorical;

/// Tag sets against fitted vocabularies
pub mod multi_label;

pub use categorical::{AgeBucket, CategoricalEncoder, CategoricalField, EncodedProfile, MIN_AGE};
pub use multi_label::{LabelEncoding, MultiLabelEncoder, Vocabulary};
