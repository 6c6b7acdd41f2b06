//! Response types for the Per-Diem Simulation Engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API. Monetary figures are rounded here, at the presentation
//! boundary, to whole yen (half away from zero); the domain result keeps
//! full precision.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AuditTrace, DeductionBreakdown, SimulationResult};

/// Rounds a monetary figure to whole yen, half away from zero.
fn round_yen(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// One scenario's deduction breakdown, rounded to whole yen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownResponse {
    /// The income subjected to tax and insurance in this scenario.
    pub taxable_income: Decimal,
    /// Health insurance premium.
    pub health_insurance: Decimal,
    /// Employees' pension insurance premium.
    pub pension_insurance: Decimal,
    /// Employment insurance premium.
    pub employment_insurance: Decimal,
    /// Long-term-care insurance premium.
    pub care_insurance: Decimal,
    /// Progressive national income tax.
    pub income_tax: Decimal,
    /// Flat-rate resident tax.
    pub resident_tax: Decimal,
    /// Non-taxable per-diem added back untaxed.
    pub non_taxable_allowance: Decimal,
    /// Net pay after all deductions plus the allowance add-back.
    pub take_home: Decimal,
}

impl From<&DeductionBreakdown> for BreakdownResponse {
    fn from(breakdown: &DeductionBreakdown) -> Self {
        Self {
            taxable_income: round_yen(breakdown.taxable_income),
            health_insurance: round_yen(breakdown.health_insurance),
            pension_insurance: round_yen(breakdown.pension_insurance),
            employment_insurance: round_yen(breakdown.employment_insurance),
            care_insurance: round_yen(breakdown.care_insurance),
            income_tax: round_yen(breakdown.income_tax),
            resident_tax: round_yen(breakdown.resident_tax),
            non_taxable_allowance: round_yen(breakdown.non_taxable_allowance),
            take_home: round_yen(breakdown.take_home),
        }
    }
}

/// Success body for the `/simulate` endpoint.
///
/// Every monetary figure is rounded independently from its full-precision
/// counterpart; the audit trace is carried through unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResponse {
    /// Unique identifier for this simulation.
    pub simulation_id: Uuid,
    /// When the simulation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the simulation.
    pub engine_version: String,
    /// Annual take-home pay under ordinary salary taxation.
    pub current_take_home: Decimal,
    /// Annual take-home pay with the proposed per-diem schedule.
    pub proposed_take_home: Decimal,
    /// Take-home delta (proposed minus current).
    pub delta: Decimal,
    /// Itemized deductions for the current scenario.
    pub current: BreakdownResponse,
    /// Itemized deductions for the proposed scenario.
    pub proposed: BreakdownResponse,
    /// Complete audit trace of calculation decisions (unrounded).
    pub audit_trace: AuditTrace,
}

impl From<SimulationResult> for SimulationResponse {
    fn from(result: SimulationResult) -> Self {
        Self {
            simulation_id: result.simulation_id,
            timestamp: result.timestamp,
            engine_version: result.engine_version,
            current_take_home: round_yen(result.current_take_home),
            proposed_take_home: round_yen(result.proposed_take_home),
            delta: round_yen(result.delta),
            current: BreakdownResponse::from(&result.current),
            proposed: BreakdownResponse::from(&result.proposed),
            audit_trace: result.audit_trace,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidSchedule { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_SCHEDULE",
                    "The loaded tax schedule is invalid",
                    message,
                ),
            },
            EngineError::NegativeInput { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input field '{}': {} is negative", field, value),
                    "Monetary inputs must be non-negative",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_yen_half_away_from_zero() {
        assert_eq!(round_yen(dec("123.4")), dec("123"));
        assert_eq!(round_yen(dec("123.5")), dec("124"));
        assert_eq!(round_yen(dec("-123.5")), dec("-124"));
        assert_eq!(round_yen(dec("123")), dec("123"));
    }

    #[test]
    fn test_breakdown_response_rounds_every_line() {
        let breakdown = DeductionBreakdown {
            taxable_income: dec("9750000"),
            health_insurance: dec("481650.4"),
            pension_insurance: dec("892124.5"),
            employment_insurance: dec("29250"),
            care_insurance: Decimal::ZERO,
            income_tax: dec("1681500"),
            resident_tax: dec("975000"),
            non_taxable_allowance: dec("250000"),
            take_home: dec("5940475.1"),
        };

        let response = BreakdownResponse::from(&breakdown);
        assert_eq!(response.health_insurance, dec("481650"));
        assert_eq!(response.pension_insurance, dec("892125"));
        assert_eq!(response.take_home, dec("5940475"));
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_negative_input_maps_to_bad_request() {
        let engine_error = EngineError::NegativeInput {
            field: "annual_income".to_string(),
            value: dec("-5"),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("annual_income"));
    }

    #[test]
    fn test_config_errors_map_to_internal_server_error() {
        let engine_error = EngineError::InvalidSchedule {
            message: "bracket table is empty".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "INVALID_SCHEDULE");
    }
}
