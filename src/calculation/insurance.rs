//! Social-insurance premium calculation.
//!
//! This module computes the health, pension, employment, and care insurance
//! premium lines as flat fractions of taxable income, with care insurance
//! gated by age bracket.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::models::{AgeBracket, AuditStep, Scenario};

/// The result of the insurance premium calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct InsurancePremiums {
    /// Health insurance premium.
    pub health: Decimal,
    /// Employees' pension insurance premium.
    pub pension: Decimal,
    /// Employment insurance premium.
    pub employment: Decimal,
    /// Long-term-care insurance premium (zero outside ages 40-64).
    pub care: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl InsurancePremiums {
    /// Sum of all four premium lines.
    pub fn total(&self) -> Decimal {
        self.health + self.pension + self.employment + self.care
    }
}

/// Computes the four social-insurance premium lines for one scenario.
///
/// Each premium is `taxable_income x rate` from the loaded schedule. The
/// care-insurance line is produced only for brackets where
/// [`AgeBracket::requires_care_insurance`] is true; otherwise it is zero.
/// A negative taxable income (degenerate allowance) flows through the
/// rates unchanged and yields negative premiums.
///
/// # Arguments
///
/// * `taxable_income` - The income subjected to premiums in this scenario
/// * `age_bracket` - The employee's age bracket (gates care insurance)
/// * `scenario` - Which scenario this pass belongs to (audit labeling)
/// * `schedule` - The loaded fiscal schedule holding the premium rates
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_insurance_premiums(
    taxable_income: Decimal,
    age_bracket: AgeBracket,
    scenario: Scenario,
    schedule: &TaxSchedule,
    step_number: u32,
) -> InsurancePremiums {
    let rates = schedule.insurance();
    let needs_care = age_bracket.requires_care_insurance();

    let health = taxable_income * rates.health_rate;
    let pension = taxable_income * rates.pension_rate;
    let employment = taxable_income * rates.employment_rate;
    let care = if needs_care {
        taxable_income * rates.care_rate
    } else {
        Decimal::ZERO
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "insurance_premiums".to_string(),
        rule_name: "Social Insurance Premiums".to_string(),
        input: serde_json::json!({
            "scenario": scenario.as_str(),
            "taxable_income": taxable_income.normalize().to_string(),
            "age_bracket": age_bracket.as_str(),
            "care_insurance_applies": needs_care
        }),
        output: serde_json::json!({
            "health": health.normalize().to_string(),
            "pension": pension.normalize().to_string(),
            "employment": employment.normalize().to_string(),
            "care": care.normalize().to_string()
        }),
        reasoning: if needs_care {
            format!(
                "Premiums on {} at rates {}/{}/{}/{} (care applies for bracket {})",
                taxable_income.normalize(),
                rates.health_rate.normalize(),
                rates.pension_rate.normalize(),
                rates.employment_rate.normalize(),
                rates.care_rate.normalize(),
                age_bracket
            )
        } else {
            format!(
                "Premiums on {} at rates {}/{}/{} (no care insurance for bracket {})",
                taxable_income.normalize(),
                rates.health_rate.normalize(),
                rates.pension_rate.normalize(),
                rates.employment_rate.normalize(),
                age_bracket
            )
        },
    };

    InsurancePremiums {
        health,
        pension,
        employment,
        care,
        audit_step,
    }
}
