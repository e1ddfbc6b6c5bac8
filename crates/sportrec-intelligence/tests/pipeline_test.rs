// ABOUTME: End-to-end tests of the recommendation pipeline with a stub classifier
// ABOUTME: Checks the reference profile, fail-fast validation, and model metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    fixed_outputs, health_vocabulary, motivation_vocabulary, reference_request, StubClassifier,
};
use sportrec_intelligence::{
    ArtifactError, InferenceAdapter, InferenceError, InferenceMode, InputValidationError,
    PipelineError, ProfileRequest, RecommendationPipeline, UserProfile,
};

fn pipeline_with(stub: &StubClassifier) -> RecommendationPipeline {
    RecommendationPipeline::new(
        motivation_vocabulary(),
        health_vocabulary(),
        InferenceAdapter::concurrent(stub.clone()),
    )
    .unwrap()
}

#[test]
fn test_reference_profile_end_to_end() {
    let stub = StubClassifier::returning(fixed_outputs());
    let pipeline = pipeline_with(&stub);

    let profile = UserProfile::try_from(reference_request()).unwrap();
    let result = pipeline.recommend(&profile).unwrap();

    assert_eq!(
        result.sports_recommendations,
        vec!["Cycling", "Yoga", "Basketball"]
    );
    assert_eq!(result.waktu_recommendation, "15-30 minutes");
    assert_eq!(result.weekly_recommendation, "2x");

    let inputs = stub.captured_inputs().unwrap();
    assert_eq!(
        inputs.sports_input,
        vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0]
    );
    assert!((inputs.waktu_input - 1.0).abs() < f32::EPSILON);
    assert!((inputs.weekly_input - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_response_serializes_with_wire_names() {
    let pipeline = pipeline_with(&StubClassifier::returning(fixed_outputs()));
    let profile = UserProfile::try_from(reference_request()).unwrap();
    let json = serde_json::to_value(pipeline.recommend(&profile).unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "sportsRecommendations": ["Cycling", "Yoga", "Basketball"],
            "waktuRecommendation": "15-30 minutes",
            "weeklyRecommendation": "2x"
        })
    );
}

#[test]
fn test_underage_profile_never_reaches_classifier() {
    let stub = StubClassifier::returning(fixed_outputs());
    let pipeline = pipeline_with(&stub);

    let request = ProfileRequest {
        age: 14,
        ..reference_request()
    };
    let profile = UserProfile::try_from(request).unwrap();
    let error = pipeline.recommend(&profile).unwrap_err();

    assert!(matches!(
        error,
        PipelineError::Input(InputValidationError::AgeBelowMinimum { age: 14, .. })
    ));
    assert_eq!(stub.call_count(), 0);
}

#[test]
fn test_unknown_gender_is_rejected_before_encoding() {
    let request = ProfileRequest {
        gender: "other".into(),
        ..reference_request()
    };
    let error = UserProfile::try_from(request).unwrap_err();
    assert!(matches!(
        error,
        InputValidationError::UnknownValue {
            field: "gender",
            ..
        }
    ));
}

#[test]
fn test_unknown_tags_do_not_change_the_vector() {
    let stub = StubClassifier::returning(fixed_outputs());
    let pipeline = pipeline_with(&stub);

    let plain = UserProfile::try_from(reference_request()).unwrap();
    let mut request = reference_request();
    request.motivation.push("competition".into());
    request.disease_history.push("flu".into());
    let noisy = UserProfile::try_from(request).unwrap();

    assert_eq!(
        pipeline.encode(&plain).unwrap(),
        pipeline.encode(&noisy).unwrap()
    );
}

#[test]
fn test_classifier_failure_yields_no_partial_result() {
    let pipeline = pipeline_with(&StubClassifier::failing(InferenceError::Backend(
        "session crashed".into(),
    )));
    let profile = UserProfile::try_from(reference_request()).unwrap();
    assert_eq!(
        pipeline.recommend(&profile),
        Err(PipelineError::Inference(InferenceError::Backend(
            "session crashed".into()
        )))
    );
}

#[test]
fn test_classifier_width_must_match_vocabularies() {
    let stub = StubClassifier::returning(fixed_outputs()).with_dimension(20);
    let error = RecommendationPipeline::new(
        motivation_vocabulary(),
        health_vocabulary(),
        InferenceAdapter::concurrent(stub),
    )
    .unwrap_err();
    assert!(matches!(
        error,
        ArtifactError::FeatureDimensionMismatch {
            model: 20,
            features: 14,
        }
    ));
}

#[test]
fn test_metadata_describes_loaded_model() {
    let stub = StubClassifier::returning(fixed_outputs());
    let pipeline = RecommendationPipeline::new(
        motivation_vocabulary(),
        health_vocabulary(),
        InferenceAdapter::serialized(stub),
    )
    .unwrap();

    let metadata = pipeline.metadata();
    assert_eq!(metadata.classifier, "stub");
    assert_eq!(metadata.inference_mode, InferenceMode::Serialized);
    assert_eq!(metadata.sports_input_dimension, 14);
    assert_eq!(metadata.motivation_tags.len(), 5);
    assert_eq!(metadata.disease_history_tags[0], "asthma");
    assert_eq!(metadata.sport_labels.len(), 15);
    assert_eq!(metadata.sport_labels[11], "Table Tennis");
    assert_eq!(metadata.weekly_labels, vec!["1x", "2x"]);
    assert_eq!(
        metadata.categorical_domains["equipment"],
        vec!["cheap", "medium", "expensive"]
    );
}
