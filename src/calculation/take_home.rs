//! Take-home pay aggregation for one taxation scenario.
//!
//! This module runs a complete deduction pass: the four insurance premium
//! lines, progressive income tax, resident tax, and the net-pay aggregation
//! with the non-taxable allowance added back in the proposed scenario.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::error::EngineResult;
use crate::models::{AgeBracket, AuditStep, DeductionBreakdown, Scenario};

use super::income_tax::calculate_income_tax;
use super::insurance::calculate_insurance_premiums;
use super::resident_tax::calculate_resident_tax;

/// The result of one deduction pass, including its audit steps.
#[derive(Debug, Clone)]
pub struct TakeHomeResult {
    /// The itemized breakdown, including the take-home figure.
    pub breakdown: DeductionBreakdown,
    /// The audit steps recorded by this pass, in rule order.
    pub audit_steps: Vec<AuditStep>,
}

/// Runs one full deduction pass for the given scenario.
///
/// Take-home pay is `taxable_income` minus all six deduction lines; the
/// proposed scenario additionally adds the full non-taxable allowance back
/// untaxed. The current scenario always records a zero allowance in its
/// breakdown.
///
/// # Arguments
///
/// * `scenario` - Which scenario this pass computes
/// * `taxable_income` - The income subjected to deductions (already reduced
///   by the allowance in the proposed scenario, never floored)
/// * `non_taxable_allowance` - The annual allowance total added back in the
///   proposed scenario
/// * `age_bracket` - The employee's age bracket (gates care insurance)
/// * `schedule` - The loaded fiscal schedule
/// * `first_step_number` - Audit step number for the first rule of this pass
pub fn calculate_take_home(
    scenario: Scenario,
    taxable_income: Decimal,
    non_taxable_allowance: Decimal,
    age_bracket: AgeBracket,
    schedule: &TaxSchedule,
    first_step_number: u32,
) -> EngineResult<TakeHomeResult> {
    let premiums = calculate_insurance_premiums(
        taxable_income,
        age_bracket,
        scenario,
        schedule,
        first_step_number,
    );
    let income_tax =
        calculate_income_tax(taxable_income, scenario, schedule, first_step_number + 1)?;
    let resident_tax =
        calculate_resident_tax(taxable_income, scenario, schedule, first_step_number + 2);

    let allowance_added_back = match scenario {
        Scenario::Current => Decimal::ZERO,
        Scenario::Proposed => non_taxable_allowance,
    };

    let take_home = taxable_income - premiums.total() - income_tax.tax - resident_tax.tax
        + allowance_added_back;

    let breakdown = DeductionBreakdown {
        taxable_income,
        health_insurance: premiums.health,
        pension_insurance: premiums.pension,
        employment_insurance: premiums.employment,
        care_insurance: premiums.care,
        income_tax: income_tax.tax,
        resident_tax: resident_tax.tax,
        non_taxable_allowance: allowance_added_back,
        take_home,
    };

    let aggregation_step = AuditStep {
        step_number: first_step_number + 3,
        rule_id: "net_pay_aggregation".to_string(),
        rule_name: "Net Pay Aggregation".to_string(),
        input: serde_json::json!({
            "scenario": scenario.as_str(),
            "taxable_income": taxable_income.normalize().to_string(),
            "total_deductions": breakdown.total_deductions().normalize().to_string(),
            "allowance_added_back": allowance_added_back.normalize().to_string()
        }),
        output: serde_json::json!({
            "take_home": take_home.normalize().to_string()
        }),
        reasoning: format!(
            "{} - {} + {} = {}",
            taxable_income.normalize(),
            breakdown.total_deductions().normalize(),
            allowance_added_back.normalize(),
            take_home.normalize()
        ),
    };

    let audit_steps = vec![
        premiums.audit_step,
        income_tax.audit_step,
        resident_tax.audit_step,
        aggregation_step,
    ];

    Ok(TakeHomeResult {
        breakdown,
        audit_steps,
    })
}
