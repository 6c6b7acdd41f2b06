//! Resident tax calculation.
//!
//! This module computes the flat-rate resident tax line.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::models::{AuditStep, Scenario};

/// The result of the resident tax calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ResidentTaxResult {
    /// The computed resident tax.
    pub tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes resident tax as a flat fraction of taxable income.
///
/// The rate comes from the loaded schedule (10% under the shipped
/// fiscal-year 2024 tables). Negative taxable income flows through
/// unchanged and yields a negative tax figure.
pub fn calculate_resident_tax(
    taxable_income: Decimal,
    scenario: Scenario,
    schedule: &TaxSchedule,
    step_number: u32,
) -> ResidentTaxResult {
    let rate = schedule.resident_tax_rate();
    let tax = taxable_income * rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "resident_tax".to_string(),
        rule_name: "Resident Tax".to_string(),
        input: serde_json::json!({
            "scenario": scenario.as_str(),
            "taxable_income": taxable_income.normalize().to_string(),
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "tax": tax.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} = {}",
            taxable_income.normalize(),
            rate.normalize(),
            tax.normalize()
        ),
    };

    ResidentTaxResult { tax, audit_step }
}
