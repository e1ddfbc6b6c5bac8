// ABOUTME: Dense feed-forward classifier loaded from an exported JSON weight file
// ABOUTME: Three independent branches produce the sports, duration, and weekly outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dense classifier artifact.
//!
//! A trained network exported as plain JSON:
//!
//! ```json
//! {
//!   "sports": [ { "weights": [[...], ...], "bias": [...], "activation": "relu" }, ... ],
//!   "waktu":  [ ... ],
//!   "weekly": [ ... ]
//! }
//! ```
//!
//! `weights` is row-major `[out][in]`. Layer widths are validated once at load so the
//! forward pass never indexes out of range.

use crate::errors::{ArtifactError, InferenceError};
use crate::features::FeatureVectors;
use crate::inference::{ModelOutputs, SportsClassifier, DURATION_CLASSES, SPORT_CLASSES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Layer activation function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Identity
    Linear,
    /// max(0, x)
    Relu,
    /// Hyperbolic tangent
    Tanh,
    /// Logistic function
    Sigmoid,
    /// Normalized exponential over the layer
    Softmax,
}

impl Activation {
    fn apply(self, values: &mut [f32]) {
        match self {
            Self::Linear => {}
            Self::Relu => values.iter_mut().for_each(|v| *v = v.max(0.0)),
            Self::Tanh => values.iter_mut().for_each(|v| *v = v.tanh()),
            Self::Sigmoid => values
                .iter_mut()
                .for_each(|v| *v = 1.0 / (1.0 + (-*v).exp())),
            Self::Softmax => {
                let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
                let mut sum = 0.0;
                for v in values.iter_mut() {
                    *v = (*v - max).exp();
                    sum += *v;
                }
                if sum > 0.0 {
                    values.iter_mut().for_each(|v| *v /= sum);
                }
            }
        }
    }
}

/// One fully connected layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseLayer {
    /// Row-major `[out][in]` weight matrix
    pub weights: Vec<Vec<f32>>,
    /// One bias per output unit
    pub bias: Vec<f32>,
    /// Applied after the affine transform
    pub activation: Activation,
}

impl DenseLayer {
    fn input_width(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    fn output_width(&self) -> usize {
        self.bias.len()
    }

    fn forward(&self, input: &[f32]) -> Vec<f32> {
        let mut output: Vec<f32> = self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(row, bias)| row.iter().zip(input).map(|(w, x)| w * x).sum::<f32>() + bias)
            .collect();
        self.activation.apply(&mut output);
        output
    }
}

/// Weight file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseNetwork {
    /// Branch fed by `sportsInput`
    pub sports: Vec<DenseLayer>,
    /// Branch fed by `waktuInput`
    pub waktu: Vec<DenseLayer>,
    /// Branch fed by `weeklyInput`
    pub weekly: Vec<DenseLayer>,
}

/// Validated, immutable dense classifier
#[derive(Debug, Clone)]
pub struct DenseClassifier {
    network: DenseNetwork,
    sports_dimension: usize,
}

impl DenseClassifier {
    /// Validate a network and wrap it as a classifier
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::InvalidModel`] if any branch is empty, a layer is
    /// ragged, consecutive layers do not chain, or a branch has the wrong input or
    /// output width
    pub fn new(network: DenseNetwork) -> Result<Self, ArtifactError> {
        let sports_dimension = validate_branch("sports", &network.sports, None, SPORT_CLASSES)?;
        validate_branch("waktu", &network.waktu, Some(1), DURATION_CLASSES)?;
        validate_branch("weekly", &network.weekly, Some(1), 1)?;
        Ok(Self {
            network,
            sports_dimension,
        })
    }

    /// Load and validate a JSON weight file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or fails validation
    pub fn from_json_file(path: &Path) -> Result<Self, ArtifactError> {
        let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let network: DenseNetwork =
            serde_json::from_str(&contents).map_err(|source| ArtifactError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(network)
    }

    fn run_branch(layers: &[DenseLayer], input: &[f32]) -> Vec<f32> {
        layers
            .iter()
            .fold(input.to_vec(), |activations, layer| layer.forward(&activations))
    }
}

impl SportsClassifier for DenseClassifier {
    fn predict(&self, inputs: &FeatureVectors) -> Result<ModelOutputs, InferenceError> {
        let sports_pred = Self::run_branch(&self.network.sports, &inputs.sports_input);
        let waktu_pred = Self::run_branch(&self.network.waktu, &[inputs.waktu_input]);
        let weekly_pred = Self::run_branch(&self.network.weekly, &[inputs.weekly_input])
            .first()
            .copied()
            .ok_or_else(|| InferenceError::Backend("weekly branch produced no output".to_owned()))?;

        Ok(ModelOutputs {
            sports_pred,
            waktu_pred,
            weekly_pred,
        })
    }

    fn sports_input_dimension(&self) -> Option<usize> {
        Some(self.sports_dimension)
    }

    fn describe(&self) -> String {
        format!(
            "dense network ({} / {} / {} layers)",
            self.network.sports.len(),
            self.network.waktu.len(),
            self.network.weekly.len()
        )
    }
}

/// Returns the branch input width
fn validate_branch(
    branch: &str,
    layers: &[DenseLayer],
    input_width: Option<usize>,
    output_width: usize,
) -> Result<usize, ArtifactError> {
    let invalid = |reason: String| ArtifactError::InvalidModel(format!("{branch}: {reason}"));

    let first = layers.first().ok_or_else(|| invalid("no layers".to_owned()))?;
    let branch_input = first.input_width();
    if branch_input == 0 {
        return Err(invalid("first layer has zero input width".to_owned()));
    }
    if let Some(expected) = input_width {
        if branch_input != expected {
            return Err(invalid(format!(
                "input width {branch_input}, expected {expected}"
            )));
        }
    }

    let mut width = branch_input;
    for (index, layer) in layers.iter().enumerate() {
        if layer.weights.len() != layer.bias.len() {
            return Err(invalid(format!(
                "layer {index} has {} weight rows but {} biases",
                layer.weights.len(),
                layer.bias.len()
            )));
        }
        if layer.weights.iter().any(|row| row.len() != width) {
            return Err(invalid(format!(
                "layer {index} rows must all have width {width}"
            )));
        }
        width = layer.output_width();
    }

    if width != output_width {
        return Err(invalid(format!(
            "output width {width}, expected {output_width}"
        )));
    }
    Ok(branch_input)
}
