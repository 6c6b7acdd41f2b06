//! Progressive income tax calculation.
//!
//! This module applies the seven-bracket marginal income-tax schedule to a
//! taxable income figure.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::error::EngineResult;
use crate::models::{AuditStep, Scenario};

/// The result of the income tax calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// The computed income tax.
    pub tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes progressive income tax for one scenario.
///
/// Evaluation picks the first bracket whose upper bound is at or above the
/// taxable income and applies its marginal-accumulation formula
/// (`base_tax + (income - lower_bound) x marginal_rate`). The schedule is
/// continuous at every boundary by construction, so tax never jumps
/// discontinuously between adjacent brackets.
///
/// Negative taxable income falls into the first bracket and its formula is
/// applied verbatim, yielding a negative tax figure; the caller surfaces
/// that case as a warning rather than an error.
///
/// # Arguments
///
/// * `taxable_income` - The income subjected to tax in this scenario
/// * `scenario` - Which scenario this pass belongs to (audit labeling)
/// * `schedule` - The loaded fiscal schedule holding the bracket table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```no_run
/// use perdiem_engine::calculation::calculate_income_tax;
/// use perdiem_engine::config::ConfigLoader;
/// use perdiem_engine::models::Scenario;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/jp2024").unwrap();
/// let result = calculate_income_tax(
///     Decimal::from(10_000_000),
///     Scenario::Current,
///     loader.schedule(),
///     1,
/// ).unwrap();
/// assert_eq!(result.tax, Decimal::from(1_764_000));
/// ```
pub fn calculate_income_tax(
    taxable_income: Decimal,
    scenario: Scenario,
    schedule: &TaxSchedule,
    step_number: u32,
) -> EngineResult<IncomeTaxResult> {
    let bracket = schedule.bracket_for(taxable_income)?;
    let tax = bracket.tax_for(taxable_income);

    let audit_step = AuditStep {
        step_number,
        rule_id: "progressive_income_tax".to_string(),
        rule_name: "Progressive Income Tax".to_string(),
        input: serde_json::json!({
            "scenario": scenario.as_str(),
            "taxable_income": taxable_income.normalize().to_string()
        }),
        output: serde_json::json!({
            "tax": tax.normalize().to_string(),
            "bracket_lower_bound": bracket.lower_bound.normalize().to_string(),
            "bracket_upper_bound": bracket
                .upper_bound
                .map(|b| b.normalize().to_string()),
            "marginal_rate": bracket.marginal_rate.normalize().to_string()
        }),
        reasoning: format!(
            "{} + ({} - {}) x {} = {}",
            bracket.base_tax.normalize(),
            taxable_income.normalize(),
            bracket.lower_bound.normalize(),
            bracket.marginal_rate.normalize(),
            tax.normalize()
        ),
    };

    Ok(IncomeTaxResult { tax, audit_step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::test_support::create_test_schedule;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tax(income: &str) -> Decimal {
        let schedule = create_test_schedule();
        calculate_income_tax(dec(income), Scenario::Current, &schedule, 1)
            .unwrap()
            .tax
    }

    /// IT-001: first bracket is a flat 5%
    #[test]
    fn test_first_bracket_flat_five_percent() {
        assert_eq!(tax("1000000"), dec("50000"));
        assert_eq!(tax("1950000"), dec("97500"));
    }

    /// IT-002: each statutory bracket matches the published formula
    #[test]
    fn test_all_statutory_brackets() {
        assert_eq!(tax("3300000"), dec("232500"));
        assert_eq!(tax("5000000"), dec("572500"));
        assert_eq!(tax("6950000"), dec("962500"));
        assert_eq!(tax("9000000"), dec("1434000"));
        assert_eq!(tax("10000000"), dec("1764000"));
        assert_eq!(tax("18000000"), dec("4404000"));
        assert_eq!(tax("40000000"), dec("13204000"));
        assert_eq!(tax("50000000"), dec("17704000"));
    }

    /// IT-003: continuity at every bracket boundary
    #[test]
    fn test_continuity_at_boundaries() {
        for boundary in [
            "1950000", "3300000", "6950000", "9000000", "18000000", "40000000",
        ] {
            let at = tax(boundary);
            let above = tax(&format!("{}.01", boundary));
            let jump = above - at;
            // The increment over a 0.01-yen step is bounded by the top
            // marginal rate; anything larger would be a discontinuity.
            assert!(
                jump >= Decimal::ZERO && jump <= dec("0.0045"),
                "discontinuity at {}: {}",
                boundary,
                jump
            );
        }
    }

    /// IT-004: zero income yields zero tax
    #[test]
    fn test_zero_income_zero_tax() {
        assert_eq!(tax("0"), Decimal::ZERO);
    }

    /// IT-005: negative income applies the first-bracket formula verbatim
    #[test]
    fn test_negative_income_first_bracket_verbatim() {
        assert_eq!(tax("-1000000"), dec("-50000"));
    }

    #[test]
    fn test_reference_scenario_tax_figures() {
        // 10,000,000 and 9,750,000 both sit in the 33% bracket.
        assert_eq!(tax("10000000"), dec("1764000"));
        assert_eq!(tax("9750000"), dec("1681500"));
    }

    #[test]
    fn test_audit_step_records_bracket_selection() {
        let schedule = create_test_schedule();
        let result =
            calculate_income_tax(dec("10000000"), Scenario::Proposed, &schedule, 6).unwrap();

        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(result.audit_step.rule_id, "progressive_income_tax");
        assert_eq!(result.audit_step.input["scenario"], "proposed");
        assert_eq!(result.audit_step.output["bracket_lower_bound"], "9000000");
        assert_eq!(result.audit_step.output["marginal_rate"], "0.33");
        assert!(result.audit_step.reasoning.contains("1764000"));
    }

    #[test]
    fn test_top_bracket_has_no_upper_bound_in_audit() {
        let schedule = create_test_schedule();
        let result =
            calculate_income_tax(dec("50000000"), Scenario::Current, &schedule, 1).unwrap();
        assert!(result.audit_step.output["bracket_upper_bound"].is_null());
    }
}
