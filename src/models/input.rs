//! Simulation input model.
//!
//! This module defines the SimulationInput struct describing one
//! employee's compensation and proposed per-diem schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::AgeBracket;

/// The input to one simulation run.
///
/// All monetary amounts are in whole-yen-denominated [`Decimal`] values;
/// trip day counts are unsigned so negative day counts are unrepresentable.
///
/// # Example
///
/// ```
/// use perdiem_engine::models::{AgeBracket, SimulationInput};
/// use rust_decimal::Decimal;
///
/// let input = SimulationInput {
///     age_bracket: AgeBracket::Thirties,
///     annual_income: Decimal::from(10_000_000),
///     domestic_per_diem: Decimal::from(5_000),
///     overseas_per_diem: Decimal::ZERO,
///     domestic_trip_days: 50,
///     overseas_trip_days: 0,
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// The employee's age bracket (gates care insurance).
    pub age_bracket: AgeBracket,
    /// Current gross annual salary before any per-diem reclassification.
    pub annual_income: Decimal,
    /// Proposed daily non-taxable allowance for domestic travel.
    pub domestic_per_diem: Decimal,
    /// Proposed daily non-taxable allowance for overseas travel.
    pub overseas_per_diem: Decimal,
    /// Annual domestic travel days.
    pub domestic_trip_days: u32,
    /// Annual overseas travel days.
    pub overseas_trip_days: u32,
}

impl SimulationInput {
    /// Validates that all monetary fields are non-negative.
    ///
    /// Returns [`EngineError::NegativeInput`] naming the first offending
    /// field. Day counts need no check because they are unsigned.
    pub fn validate(&self) -> EngineResult<()> {
        let monetary_fields = [
            ("annual_income", self.annual_income),
            ("domestic_per_diem", self.domestic_per_diem),
            ("overseas_per_diem", self.overseas_per_diem),
        ];

        for (field, value) in monetary_fields {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::NegativeInput {
                    field: field.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_input() -> SimulationInput {
        SimulationInput {
            age_bracket: AgeBracket::Thirties,
            annual_income: dec("10000000"),
            domestic_per_diem: dec("5000"),
            overseas_per_diem: dec("8000"),
            domestic_trip_days: 50,
            overseas_trip_days: 10,
        }
    }

    #[test]
    fn test_valid_input_passes_validation() {
        assert!(create_test_input().validate().is_ok());
    }

    #[test]
    fn test_zero_amounts_pass_validation() {
        let input = SimulationInput {
            annual_income: Decimal::ZERO,
            domestic_per_diem: Decimal::ZERO,
            overseas_per_diem: Decimal::ZERO,
            ..create_test_input()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_negative_income_rejected() {
        let input = SimulationInput {
            annual_income: dec("-1"),
            ..create_test_input()
        };
        match input.validate().unwrap_err() {
            EngineError::NegativeInput { field, value } => {
                assert_eq!(field, "annual_income");
                assert_eq!(value, dec("-1"));
            }
            other => panic!("Expected NegativeInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_per_diem_rejected() {
        let input = SimulationInput {
            overseas_per_diem: dec("-8000"),
            ..create_test_input()
        };
        match input.validate().unwrap_err() {
            EngineError::NegativeInput { field, .. } => {
                assert_eq!(field, "overseas_per_diem");
            }
            other => panic!("Expected NegativeInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_zero_passes_validation() {
        // Decimal can represent -0; treat it as zero, not as negative input.
        let input = SimulationInput {
            domestic_per_diem: dec("-0"),
            ..create_test_input()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_deserialize_from_wire_format() {
        let json = r#"{
            "age_bracket": "40-49",
            "annual_income": "6000000",
            "domestic_per_diem": "3000",
            "overseas_per_diem": "0",
            "domestic_trip_days": 20,
            "overseas_trip_days": 0
        }"#;

        let input: SimulationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.age_bracket, AgeBracket::Forties);
        assert_eq!(input.annual_income, dec("6000000"));
        assert_eq!(input.domestic_trip_days, 20);
    }

    #[test]
    fn test_serialize_round_trip() {
        let input = create_test_input();
        let json = serde_json::to_string(&input).unwrap();
        let back: SimulationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}
