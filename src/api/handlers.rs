//! HTTP request handlers for the SAD Pay Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_pay, compare_results};
use crate::models::{Grade, PayInput, ServiceCategory};

use super::request::{CalculationRequest, ComparisonRequest, PayInputRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, CategoryOption, ComparisonResponse,
    GradesResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/compare", post(compare_handler))
        .route("/grades", get(grades_handler))
        .with_state(state)
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a body extraction failure to an API error.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Handler for POST /calculate endpoint.
///
/// Validates the scenario and returns its monthly breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_error(rejection, correlation_id).into_response(),
    };

    let input = match request.input.validate() {
        Ok(input) => input,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid calculation input"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let result = calculate_pay(&input, state.tables());
    info!(
        correlation_id = %correlation_id,
        category = %input.service_category,
        grade = %input.grade,
        months = result.monthly_breakdown.len(),
        grand_total = %result.grand_total,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    json_ok(CalculationResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        service_member: request.service_member,
        result,
    })
}

/// Handler for POST /compare endpoint.
///
/// Calculates both scenarios and reports the over- or under-payment.
async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing comparison request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_error(rejection, correlation_id).into_response(),
    };

    let original_input = match validate_side(request.original, "original", correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let corrected_input = match validate_side(request.corrected, "corrected", correlation_id) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let original = calculate_pay(&original_input, state.tables());
    let corrected = calculate_pay(&corrected_input, state.tables());
    let comparison = compare_results(&original, &corrected);
    info!(
        correlation_id = %correlation_id,
        original_total = %comparison.original_total,
        corrected_total = %comparison.corrected_total,
        difference = %comparison.difference,
        status = %comparison.status,
        duration_us = start_time.elapsed().as_micros(),
        "Comparison completed successfully"
    );

    json_ok(ComparisonResponse {
        comparison_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        service_member: request.service_member,
        original,
        corrected,
        comparison,
    })
}

/// Validates one side of a comparison, naming the side in any error.
fn validate_side(
    request: PayInputRequest,
    side: &str,
    correlation_id: Uuid,
) -> Result<PayInput, Response> {
    request.validate().map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            side,
            error = %err,
            "Invalid comparison input"
        );
        let mut response = ApiErrorResponse::from(err);
        response.error.details = Some(format!("In the {} scenario", side));
        response.into_response()
    })
}

/// Handler for GET /grades endpoint.
async fn grades_handler(State(state): State<AppState>) -> Response {
    json_ok(GradesResponse {
        grades: Grade::ALL.iter().map(|g| g.code().to_string()).collect(),
        service_categories: ServiceCategory::ALL
            .iter()
            .map(|c| CategoryOption {
                value: serde_json::to_value(c)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default(),
                label: c.display_name().to_string(),
                flat_rate: c.uses_flat_rates(),
            })
            .collect(),
        schedule_version: state.tables().metadata().version.clone(),
    })
}
