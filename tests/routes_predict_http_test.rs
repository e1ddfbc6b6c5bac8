// ABOUTME: HTTP integration tests for the prediction route
// ABOUTME: Covers the reference recommendation, validation failures, and classifier failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{reference_profile, resources_with, test_resources, StubClassifier};
use serde_json::{json, Value};
use sportrec_intelligence::InferenceError;
use sportrec_server::config::environment::ServerConfig;
use sportrec_server::routes::PredictionRoutes;
use sportrec_server::server::build_router;

fn predict_routes() -> axum::Router {
    PredictionRoutes::routes(test_resources())
}

fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap()
}

// ============================================================================
// POST /predict - Success
// ============================================================================

#[tokio::test]
async fn test_predict_reference_profile() {
    let response = AxumTestRequest::post("/predict")
        .json(&reference_profile())
        .send(predict_routes())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "sportsRecommendations": ["Cycling", "Yoga", "Basketball"],
            "waktuRecommendation": "15-30 minutes",
            "weeklyRecommendation": "2x"
        })
    );
}

#[tokio::test]
async fn test_predict_ignores_unknown_tags_and_extra_fields() {
    let mut profile = reference_profile();
    profile["motivation"] = json!(["fun", "competition"]);
    profile["diseaseHistory"] = json!(["flu"]);
    profile["nickname"] = json!("runner");

    let response = AxumTestRequest::post("/predict")
        .json(&profile)
        .send(predict_routes())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["sportsRecommendations"][0], "Cycling");
}

// ============================================================================
// POST /predict - Validation failures
// ============================================================================

#[tokio::test]
async fn test_predict_rejects_underage_profile() {
    let mut profile = reference_profile();
    profile["age"] = json!(14);

    let response = AxumTestRequest::post("/predict")
        .json(&profile)
        .send(predict_routes())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "VALUE_OUT_OF_RANGE");
    assert_eq!(body["error"]["details"]["field"], "age");
    assert_eq!(body["error"]["details"]["minimum"], 15);
}

#[tokio::test]
async fn test_predict_rejects_unknown_gender() {
    let mut profile = reference_profile();
    profile["gender"] = json!("other");

    let response = AxumTestRequest::post("/predict")
        .json(&profile)
        .send(predict_routes())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INVALID_INPUT");
    assert_eq!(body["error"]["details"]["field"], "gender");
    assert_eq!(body["error"]["details"]["expected"], json!(["female", "male"]));
}

#[tokio::test]
async fn test_predict_enum_values_are_case_sensitive() {
    let mut profile = reference_profile();
    profile["placePreference"] = json!("Indoor");

    let response = AxumTestRequest::post("/predict")
        .json(&profile)
        .send(predict_routes())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["details"]["field"], "placePreference");
}

#[tokio::test]
async fn test_predict_reports_missing_field() {
    let mut profile = reference_profile();
    profile.as_object_mut().unwrap().remove("fitnessLevel");

    let response = AxumTestRequest::post("/predict")
        .json(&profile)
        .send(predict_routes())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "MISSING_REQUIRED_FIELD");
    assert_eq!(body["error"]["details"]["field"], "fitnessLevel");
}

#[tokio::test]
async fn test_predict_rejects_malformed_json() {
    let response = AxumTestRequest::post("/predict")
        .raw_json("{\"age\": 20,")
        .send(predict_routes())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INVALID_FORMAT");
}

#[tokio::test]
async fn test_predict_rejects_wrong_types() {
    let mut profile = reference_profile();
    profile["age"] = json!("twenty");

    let response = AxumTestRequest::post("/predict")
        .json(&profile)
        .send(predict_routes())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INVALID_FORMAT");
}

#[tokio::test]
async fn test_predict_requires_json_content_type() {
    let response = AxumTestRequest::post("/predict")
        .body(&reference_profile().to_string())
        .send(predict_routes())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INVALID_FORMAT");
}

// ============================================================================
// POST /predict - Classifier failures
// ============================================================================

#[tokio::test]
async fn test_predict_model_unavailable_is_503() {
    let resources = resources_with(
        StubClassifier::failing(InferenceError::ModelUnavailable("not loaded".into())),
        ServerConfig::default(),
    );

    let response = AxumTestRequest::post("/predict")
        .json(&reference_profile())
        .send(PredictionRoutes::routes(resources))
        .await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "MODEL_UNAVAILABLE");
}

#[tokio::test]
async fn test_predict_backend_failure_is_500() {
    let resources = resources_with(
        StubClassifier::failing(InferenceError::Backend("session crashed".into())),
        ServerConfig::default(),
    );

    let response = AxumTestRequest::post("/predict")
        .json(&reference_profile())
        .send(PredictionRoutes::routes(resources))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "INFERENCE_FAILED");
    assert!(body.get("sportsRecommendations").is_none());
}

// ============================================================================
// Full router - request IDs, limits, fallback
// ============================================================================

#[tokio::test]
async fn test_request_id_is_echoed_and_attached_to_errors() {
    let mut profile = reference_profile();
    profile["gender"] = json!("other");

    let response = AxumTestRequest::post("/predict")
        .header("x-request-id", "req_client_supplied")
        .json(&profile)
        .send(build_router(&test_resources()))
        .await;

    assert_eq!(response.status(), 400);
    assert_eq!(response.header("x-request-id"), Some("req_client_supplied"));
    let body: Value = response.json();
    assert_eq!(body["error"]["request_id"], "req_client_supplied");
}

#[tokio::test]
async fn test_request_id_is_generated_when_absent() {
    let response = AxumTestRequest::post("/predict")
        .json(&reference_profile())
        .send(build_router(&test_resources()))
        .await;

    assert_eq!(response.status(), 200);
    let request_id = response.header("x-request-id").unwrap();
    assert!(request_id.starts_with("req_"));
}

#[tokio::test]
async fn test_body_limit_is_enforced() {
    let config = ServerConfig {
        body_limit_bytes: 64,
        ..ServerConfig::default()
    };
    let resources = resources_with(StubClassifier::reference(), config);
    let body = reference_profile().to_string();

    let response = AxumTestRequest::post("/predict")
        .header("content-length", &body.len().to_string())
        .raw_json(&body)
        .send(build_router(&resources))
        .await;

    assert_eq!(response.status(), 413);
}

#[tokio::test]
async fn test_unknown_route_returns_error_envelope() {
    let response = AxumTestRequest::get("/recommendations")
        .send(build_router(&test_resources()))
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(error_code(&body), "RESOURCE_NOT_FOUND");
}
