// ABOUTME: Shared fixtures for recommendation pipeline integration tests
// ABOUTME: Deterministic stub classifier, vocabularies, and a reference profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use sportrec_intelligence::{
    FeatureVectors, InferenceError, ModelOutputs, ProfileRequest, SportsClassifier, Vocabulary,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const MOTIVATION_TAGS: [&str; 5] = ["fun", "health", "weight loss", "social", "stress relief"];
pub const HEALTH_TAGS: [&str; 4] = ["asthma", "diabetes", "hypertension", "joint pain"];

/// Synthetic sport distribution whose top three classes are 1, 3, 7
pub const SPORTS_PRED: [f32; 15] = [
    0.05, 0.5, 0.02, 0.3, 0.0, 0.0, 0.0, 0.1, 0.0, 0.0, 0.0, 0.03, 0.0, 0.0, 0.0,
];
pub const WAKTU_PRED: [f32; 5] = [0.1, 0.6, 0.2, 0.05, 0.05];
pub const WEEKLY_PRED: f32 = 0.7;

pub fn motivation_vocabulary() -> Vocabulary {
    Vocabulary::new(
        "motivation",
        MOTIVATION_TAGS.iter().map(|t| (*t).to_owned()).collect(),
    )
    .unwrap()
}

pub fn health_vocabulary() -> Vocabulary {
    Vocabulary::new(
        "diseaseHistory",
        HEALTH_TAGS.iter().map(|t| (*t).to_owned()).collect(),
    )
    .unwrap()
}

pub fn fixed_outputs() -> ModelOutputs {
    ModelOutputs {
        sports_pred: SPORTS_PRED.to_vec(),
        waktu_pred: WAKTU_PRED.to_vec(),
        weekly_pred: WEEKLY_PRED,
    }
}

/// Reference request: 20 year old male, indoor, alone, cheap, 15-30 minutes, average
pub fn reference_request() -> ProfileRequest {
    ProfileRequest {
        age: 20,
        gender: "male".into(),
        place_preference: "indoor".into(),
        social_preference: "alone".into(),
        equipment: "cheap".into(),
        available_time: "15-30 minutes".into(),
        fitness_level: "average".into(),
        motivation: vec!["fun".into()],
        disease_history: vec![],
    }
}

/// Classifier returning fixed outputs and recording what it was called with
#[derive(Clone)]
pub struct StubClassifier {
    outputs: Result<ModelOutputs, InferenceError>,
    dimension: Option<usize>,
    pub calls: Arc<AtomicUsize>,
    pub last_inputs: Arc<Mutex<Option<FeatureVectors>>>,
}

impl StubClassifier {
    pub fn returning(outputs: ModelOutputs) -> Self {
        Self {
            outputs: Ok(outputs),
            dimension: None,
            calls: Arc::new(AtomicUsize::new(0)),
            last_inputs: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(error: InferenceError) -> Self {
        Self {
            outputs: Err(error),
            ..Self::returning(fixed_outputs())
        }
    }

    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn captured_inputs(&self) -> Option<FeatureVectors> {
        self.last_inputs.lock().unwrap().clone()
    }
}

impl SportsClassifier for StubClassifier {
    fn predict(&self, inputs: &FeatureVectors) -> Result<ModelOutputs, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_inputs.lock().unwrap() = Some(inputs.clone());
        self.outputs.clone()
    }

    fn sports_input_dimension(&self) -> Option<usize> {
        self.dimension
    }

    fn describe(&self) -> String {
        "stub".to_owned()
    }
}

/// Dense network whose outputs depend only on biases, except the weekly branch
///
/// - sports: single softmax layer, top classes 1, 3, 7
/// - waktu: single softmax layer, argmax class 1
/// - weekly: `sigmoid(weeklyInput - 1.5)`, so fitness level `good` (2) decodes to `2x`
pub fn dense_network_json(sports_dimension: usize) -> serde_json::Value {
    let mut sports_bias = vec![0.0_f32; 15];
    sports_bias[1] = 3.0;
    sports_bias[3] = 2.0;
    sports_bias[7] = 1.0;

    serde_json::json!({
        "sports": [{
            "weights": vec![vec![0.0_f32; sports_dimension]; 15],
            "bias": sports_bias,
            "activation": "softmax"
        }],
        "waktu": [{
            "weights": vec![vec![0.0_f32; 1]; 5],
            "bias": [0.0, 2.0, 0.0, 0.0, 0.0],
            "activation": "softmax"
        }],
        "weekly": [{
            "weights": [[1.0]],
            "bias": [-1.5],
            "activation": "sigmoid"
        }]
    })
}

/// Write a JSON value to a temporary file
pub fn write_json(value: &serde_json::Value) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    serde_json::to_writer(file.as_file(), value).unwrap();
    file
}
