//! Non-taxable allowance total calculation.
//!
//! This module computes the annual amount of compensation reclassified as
//! non-taxable travel per-diem, across domestic and overseas travel.

use rust_decimal::Decimal;

use crate::models::{AuditStep, SimulationInput};

/// The result of the allowance total calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct AllowanceResult {
    /// The annual non-taxable allowance total.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the annual non-taxable per-diem allowance total.
///
/// The total is `domestic_per_diem x domestic_trip_days +
/// overseas_per_diem x overseas_trip_days`. This amount is excluded from
/// taxable income in the proposed scenario and added back to net pay
/// untaxed.
///
/// # Arguments
///
/// * `input` - The simulation input holding per-diem rates and day counts
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use perdiem_engine::calculation::calculate_nontaxable_allowance;
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
///
/// let result = calculate_nontaxable_allowance(&input, 1);
/// assert_eq!(result.total, Decimal::from(250_000));
/// ```
pub fn calculate_nontaxable_allowance(input: &SimulationInput, step_number: u32) -> AllowanceResult {
    let domestic_total = input.domestic_per_diem * Decimal::from(input.domestic_trip_days);
    let overseas_total = input.overseas_per_diem * Decimal::from(input.overseas_trip_days);
    let total = domestic_total + overseas_total;

    let audit_step = AuditStep {
        step_number,
        rule_id: "nontaxable_allowance".to_string(),
        rule_name: "Non-Taxable Allowance Total".to_string(),
        input: serde_json::json!({
            "domestic_per_diem": input.domestic_per_diem.normalize().to_string(),
            "domestic_trip_days": input.domestic_trip_days,
            "overseas_per_diem": input.overseas_per_diem.normalize().to_string(),
            "overseas_trip_days": input.overseas_trip_days
        }),
        output: serde_json::json!({
            "domestic_total": domestic_total.normalize().to_string(),
            "overseas_total": overseas_total.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} days + {} x {} days = {}",
            input.domestic_per_diem.normalize(),
            input.domestic_trip_days,
            input.overseas_per_diem.normalize(),
            input.overseas_trip_days,
            total.normalize()
        ),
    };

    AllowanceResult { total, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgeBracket;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_input(
        domestic_per_diem: &str,
        domestic_days: u32,
        overseas_per_diem: &str,
        overseas_days: u32,
    ) -> SimulationInput {
        SimulationInput {
            age_bracket: AgeBracket::Thirties,
            annual_income: dec("10000000"),
            domestic_per_diem: dec(domestic_per_diem),
            overseas_per_diem: dec(overseas_per_diem),
            domestic_trip_days: domestic_days,
            overseas_trip_days: overseas_days,
        }
    }

    /// AL-001: domestic-only schedule
    #[test]
    fn test_domestic_only_schedule() {
        let input = create_input("5000", 50, "0", 0);
        let result = calculate_nontaxable_allowance(&input, 1);

        assert_eq!(result.total, dec("250000"));
        assert_eq!(result.audit_step.rule_id, "nontaxable_allowance");
        assert_eq!(result.audit_step.output["total"], "250000");
    }

    /// AL-002: combined domestic and overseas schedule
    #[test]
    fn test_combined_schedule() {
        let input = create_input("5000", 50, "8000", 10);
        let result = calculate_nontaxable_allowance(&input, 1);

        assert_eq!(result.total, dec("330000"));
        assert_eq!(result.audit_step.output["domestic_total"], "250000");
        assert_eq!(result.audit_step.output["overseas_total"], "80000");
    }

    /// AL-003: zero per-diem yields zero allowance
    #[test]
    fn test_zero_per_diem_yields_zero() {
        let input = create_input("0", 50, "0", 10);
        let result = calculate_nontaxable_allowance(&input, 1);
        assert_eq!(result.total, Decimal::ZERO);
    }

    /// AL-004: zero trip days yields zero allowance
    #[test]
    fn test_zero_trip_days_yields_zero() {
        let input = create_input("5000", 0, "8000", 0);
        let result = calculate_nontaxable_allowance(&input, 1);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_has_given_step_number() {
        let input = create_input("5000", 50, "0", 0);
        let result = calculate_nontaxable_allowance(&input, 3);
        assert_eq!(result.audit_step.step_number, 3);
    }

    #[test]
    fn test_audit_reasoning_shows_both_products() {
        let input = create_input("5000", 50, "8000", 10);
        let result = calculate_nontaxable_allowance(&input, 1);
        assert!(result.audit_step.reasoning.contains("5000 x 50 days"));
        assert!(result.audit_step.reasoning.contains("8000 x 10 days"));
        assert!(result.audit_step.reasoning.contains("330000"));
    }
}
