//! Request types for the Per-Diem Simulation Engine API.
//!
//! This module defines the JSON request structure for the `/simulate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AgeBracket, SimulationInput};

/// Request body for the `/simulate` endpoint.
///
/// Contains the employee's compensation and the proposed per-diem
/// schedule. Per-diem fields default to zero so a caller can simulate a
/// domestic-only or overseas-only schedule without sending both halves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// The employee's age bracket (e.g., "30-39").
    pub age_bracket: AgeBracket,
    /// Current gross annual salary in yen.
    pub annual_income: Decimal,
    /// Proposed daily non-taxable allowance for domestic travel.
    #[serde(default)]
    pub domestic_per_diem: Decimal,
    /// Proposed daily non-taxable allowance for overseas travel.
    #[serde(default)]
    pub overseas_per_diem: Decimal,
    /// Annual domestic travel days.
    #[serde(default)]
    pub domestic_trip_days: u32,
    /// Annual overseas travel days.
    #[serde(default)]
    pub overseas_trip_days: u32,
}

impl From<SimulationRequest> for SimulationInput {
    fn from(request: SimulationRequest) -> Self {
        SimulationInput {
            age_bracket: request.age_bracket,
            annual_income: request.annual_income,
            domestic_per_diem: request.domestic_per_diem,
            overseas_per_diem: request.overseas_per_diem,
            domestic_trip_days: request.domestic_trip_days,
            overseas_trip_days: request.overseas_trip_days,
        }
    }
}
