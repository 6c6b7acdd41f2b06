//! HTTP request handlers for the Per-Diem Simulation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_delta;
use crate::models::SimulationInput;

use super::request::SimulationRequest;
use super::response::{ApiError, ApiErrorResponse, SimulationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/simulate", post(simulate_handler))
        .with_state(state)
}

/// Handler for POST /simulate endpoint.
///
/// Accepts a simulation request and returns the computed take-home delta
/// with both scenario breakdowns, rounded to whole yen.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde,
                    // including unknown age-bracket variants.
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let input: SimulationInput = request.into();
    let schedule = state.config().schedule();

    match compute_delta(&input, schedule) {
        Ok(result) => {
            if !result.audit_trace.warnings.is_empty() {
                warn!(
                    correlation_id = %correlation_id,
                    warnings = result.audit_trace.warnings.len(),
                    "Simulation completed with warnings"
                );
            }
            info!(
                correlation_id = %correlation_id,
                simulation_id = %result.simulation_id,
                delta = %result.delta,
                duration_us = result.audit_trace.duration_us,
                "Simulation completed"
            );
            let response: SimulationResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Simulation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
