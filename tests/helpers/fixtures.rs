// ABOUTME: Pipeline fixtures for HTTP tests: stub classifier, vocabularies, resources
// ABOUTME: Lets route tests run the real pipeline without model artifacts on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use sportrec_intelligence::{
    FeatureVectors, InferenceAdapter, InferenceError, ModelOutputs, RecommendationPipeline,
    SportsClassifier, Vocabulary,
};
use sportrec_server::config::environment::ServerConfig;
use sportrec_server::resources::ServerResources;
use std::sync::Arc;

pub const MOTIVATION_TAGS: [&str; 5] = ["fun", "health", "weight loss", "social", "stress relief"];
pub const HEALTH_TAGS: [&str; 4] = ["asthma", "diabetes", "hypertension", "joint pain"];

/// Classifier with fixed outputs; top sports are classes 1, 3, 7
pub struct StubClassifier {
    outputs: Result<ModelOutputs, InferenceError>,
}

impl StubClassifier {
    pub fn reference() -> Self {
        Self {
            outputs: Ok(ModelOutputs {
                sports_pred: vec![
                    0.05, 0.5, 0.02, 0.3, 0.0, 0.0, 0.0, 0.1, 0.0, 0.0, 0.0, 0.03, 0.0, 0.0, 0.0,
                ],
                waktu_pred: vec![0.1, 0.6, 0.2, 0.05, 0.05],
                weekly_pred: 0.7,
            }),
        }
    }

    pub fn failing(error: InferenceError) -> Self {
        Self {
            outputs: Err(error),
        }
    }
}

impl SportsClassifier for StubClassifier {
    fn predict(&self, _inputs: &FeatureVectors) -> Result<ModelOutputs, InferenceError> {
        self.outputs.clone()
    }

    fn describe(&self) -> String {
        "stub".to_owned()
    }
}

fn vocabulary(name: &str, tags: &[&str]) -> Vocabulary {
    Vocabulary::new(name, tags.iter().map(|t| (*t).to_owned()).collect()).unwrap()
}

pub fn resources_with(classifier: StubClassifier, config: ServerConfig) -> Arc<ServerResources> {
    let pipeline = RecommendationPipeline::new(
        vocabulary("motivation", &MOTIVATION_TAGS),
        vocabulary("diseaseHistory", &HEALTH_TAGS),
        InferenceAdapter::concurrent(classifier),
    )
    .unwrap();
    Arc::new(ServerResources::new(pipeline, config))
}

pub fn test_resources() -> Arc<ServerResources> {
    resources_with(StubClassifier::reference(), ServerConfig::default())
}

/// Reference profile body
pub fn reference_profile() -> serde_json::Value {
    serde_json::json!({
        "age": 20,
        "gender": "male",
        "placePreference": "indoor",
        "socialPreference": "alone",
        "equipment": "cheap",
        "availableTime": "15-30 minutes",
        "fitnessLevel": "average",
        "motivation": ["fun"],
        "diseaseHistory": []
    })
}
