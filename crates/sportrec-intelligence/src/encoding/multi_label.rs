// ABOUTME: Multi-label encoder mapping free-form tag sets to fixed-width indicator vectors
// ABOUTME: Column order comes from a pre-fitted vocabulary loaded once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ArtifactError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Ordered list of known tags for one multi-label field
///
/// The position of a tag is its column in the indicator vector. Vocabularies are
/// immutable once constructed.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    name: String,
    tags: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from an ordered tag list
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or contains the same tag twice
    pub fn new(name: impl Into<String>, tags: Vec<String>) -> Result<Self, ArtifactError> {
        let name = name.into();
        if tags.is_empty() {
            return Err(ArtifactError::EmptyVocabulary { name });
        }

        let mut index = HashMap::with_capacity(tags.len());
        for (position, tag) in tags.iter().enumerate() {
            if index.insert(tag.clone(), position).is_some() {
                return Err(ArtifactError::DuplicateTag {
                    name,
                    tag: tag.clone(),
                });
            }
        }

        Ok(Self { name, tags, index })
    }

    /// Load a vocabulary from a JSON array of strings
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON string array, or
    /// fails the checks of [`Vocabulary::new`]
    pub fn from_json_file(name: impl Into<String>, path: &Path) -> Result<Self, ArtifactError> {
        let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tags: Vec<String> =
            serde_json::from_str(&contents).map_err(|source| ArtifactError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(name, tags)
    }

    /// Vocabulary name, used in logs
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tags in column order
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Number of tags (K)
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Always false for a constructed vocabulary
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Column of a tag, if known
    #[must_use]
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.index.get(tag).copied()
    }
}

/// Indicator vector plus the input tags that were not in the vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoding {
    /// One column per vocabulary tag, 1 when present
    pub indicators: Vec<u8>,
    /// Input tags with no column; dropped from the indicator vector
    pub unknown: Vec<String>,
}

/// Multi-label binarizer over a fixed vocabulary
///
/// Unknown tags are dropped rather than rejected, matching how the vocabulary was
/// fitted. [`MultiLabelEncoder::encode`] reports them so callers can log them.
#[derive(Debug, Clone)]
pub struct MultiLabelEncoder {
    vocabulary: Vocabulary,
}

impl MultiLabelEncoder {
    /// Create an encoder over a fitted vocabulary
    #[must_use]
    pub const fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Underlying vocabulary
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Output width (K)
    #[must_use]
    pub fn width(&self) -> usize {
        self.vocabulary.len()
    }

    /// Map a tag set to its indicator vector, dropping unknown tags
    pub fn transform<I, S>(&self, tags: I) -> Vec<u8>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.encode(tags).indicators
    }

    /// Map a tag set to its indicator vector and report dropped tags
    pub fn encode<I, S>(&self, tags: I) -> LabelEncoding
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut indicators = vec![0_u8; self.vocabulary.len()];
        let mut unknown = Vec::new();

        for tag in tags {
            let tag = tag.as_ref();
            match self.vocabulary.position(tag) {
                Some(column) => indicators[column] = 1,
                None => {
                    if !unknown.iter().any(|seen: &String| seen == tag) {
                        unknown.push(tag.to_owned());
                    }
                }
            }
        }

        LabelEncoding {
            indicators,
            unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(
            "motivation",
            vec!["fun".into(), "health".into(), "weight loss".into()],
        )
        .unwrap()
    }

    #[test]
    fn test_unknown_tags_are_reported_once() {
        let encoder = MultiLabelEncoder::new(vocabulary());
        let encoding = encoder.encode(["fun", "glory", "glory"]);
        assert_eq!(encoding.indicators, vec![1, 0, 0]);
        assert_eq!(encoding.unknown, vec!["glory".to_owned()]);
    }

    #[test]
    fn test_rejects_duplicate_tags() {
        let result = Vocabulary::new("health", vec!["asthma".into(), "asthma".into()]);
        assert!(matches!(result, Err(ArtifactError::DuplicateTag { .. })));
    }
}
