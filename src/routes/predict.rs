// ABOUTME: Recommendation route: profile JSON in, sports, duration, and frequency out
// ABOUTME: Maps body rejections to validation errors and runs inference off the async executor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prediction routes
//!
//! `POST /predict` accepts a profile and returns a [`RecommendationResult`]. Any body
//! that does not deserialize into a [`ProfileRequest`] is answered with the unified
//! error envelope instead of axum's plain-text rejection.

use crate::constants::endpoints;
use crate::errors::{AppError, AppResult};
use crate::middleware::request_id_from_headers;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use sportrec_intelligence::{
    InputValidationError, ProfileRequest, RecommendationResult, UserProfile,
};
use std::sync::Arc;
use tokio::task;
use tracing::debug;

/// Recommendation routes
pub struct PredictionRoutes;

impl PredictionRoutes {
    /// Create the prediction route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::PREDICT, post(Self::handle_predict))
            .with_state(resources)
    }

    /// POST /predict - recommend sports for one profile
    async fn handle_predict(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<ProfileRequest>, JsonRejection>,
    ) -> AppResult<Json<RecommendationResult>> {
        let request_id = request_id_from_headers(&headers).map(ToOwned::to_owned);
        let tag = |error: AppError| match &request_id {
            Some(id) => error.with_request_id(id.clone()),
            None => error,
        };

        let Json(request) = payload.map_err(|rejection| tag(rejection_to_error(&rejection)))?;
        let profile = UserProfile::try_from(request).map_err(|e| tag(e.into()))?;
        debug!(?profile, "Profile accepted");

        let pipeline = Arc::clone(&resources.pipeline);
        let result = task::spawn_blocking(move || pipeline.recommend(&profile))
            .await
            .map_err(|e| tag(AppError::internal(format!("Prediction task failed: {e}"))))?
            .map_err(|e| tag(e.into()))?;

        Ok(Json(result))
    }
}

/// Translate an axum JSON body rejection into the validation error taxonomy
pub(crate) fn rejection_to_error(rejection: &JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::payload_too_large(rejection.body_text());
    }

    let reason = rejection.body_text();
    let error = match rejection {
        JsonRejection::JsonDataError(_) => missing_field_name(&reason).map_or_else(
            || InputValidationError::MalformedRequest {
                reason: reason.clone(),
            },
            |field| InputValidationError::MissingField {
                field: field.to_owned(),
            },
        ),
        _ => InputValidationError::MalformedRequest { reason },
    };
    error.into()
}

/// Extract the field name from serde's "missing field `name`" message
fn missing_field_name(message: &str) -> Option<&str> {
    const MARKER: &str = "missing field `";
    let start = message.find(MARKER)? + MARKER.len();
    let end = message[start..].find('`')?;
    Some(&message[start..start + end])
}
