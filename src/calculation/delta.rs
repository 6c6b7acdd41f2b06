//! Top-level simulation entry point.
//!
//! This module provides [`compute_delta`], the pure function that runs both
//! taxation scenarios and assembles the complete [`SimulationResult`].

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::TaxSchedule;
use crate::error::EngineResult;
use crate::models::{AuditTrace, AuditWarning, Scenario, SimulationInput, SimulationResult};

use super::allowance::calculate_nontaxable_allowance;
use super::take_home::calculate_take_home;

/// Warning code attached when the allowance exceeds annual income.
pub const DEGENERATE_ALLOWANCE_CODE: &str = "DEGENERATE_ALLOWANCE";

/// Computes the take-home delta between the current and proposed scenarios.
///
/// Deterministic and side-effect free: the function validates the input,
/// totals the non-taxable allowance, runs both deduction passes against the
/// given schedule, and returns the delta with both itemized breakdowns and
/// a complete audit trace.
///
/// An allowance exceeding the annual income is not an error: the proposed
/// pass runs on the resulting negative taxable income (never floored) and
/// the result carries a [`DEGENERATE_ALLOWANCE_CODE`] warning.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::NegativeInput`] if any monetary
/// input is negative.
///
/// # Examples
///
/// ```no_run
/// use perdiem_engine::calculation::compute_delta;
/// use perdiem_engine::config::ConfigLoader;
/// use perdiem_engine::models::{AgeBracket, SimulationInput};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/jp2024").unwrap();
/// let input = SimulationInput {
///     age_bracket: AgeBracket::Thirties,
///     annual_income: Decimal::from(10_000_000),
///     domestic_per_diem: Decimal::from(5_000),
///     overseas_per_diem: Decimal::ZERO,
///     domestic_trip_days: 50,
///     overseas_trip_days: 0,
/// };
///
/// let result = compute_delta(&input, loader.schedule()).unwrap();
/// assert_eq!(result.delta, Decimal::from(143_475));
/// ```
pub fn compute_delta(
    input: &SimulationInput,
    schedule: &TaxSchedule,
) -> EngineResult<SimulationResult> {
    let start_time = Instant::now();
    input.validate()?;

    let mut steps = Vec::new();
    let mut warnings = Vec::new();

    let allowance = calculate_nontaxable_allowance(input, 1);
    steps.push(allowance.audit_step.clone());

    let current = calculate_take_home(
        Scenario::Current,
        input.annual_income,
        allowance.total,
        input.age_bracket,
        schedule,
        2,
    )?;
    steps.extend(current.audit_steps);

    let proposed_taxable = input.annual_income - allowance.total;
    if proposed_taxable < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: DEGENERATE_ALLOWANCE_CODE.to_string(),
            message: format!(
                "non-taxable allowance {} exceeds annual income {}; proposed taxable income is negative",
                allowance.total.normalize(),
                input.annual_income.normalize()
            ),
            severity: "medium".to_string(),
        });
    }

    let proposed = calculate_take_home(
        Scenario::Proposed,
        proposed_taxable,
        allowance.total,
        input.age_bracket,
        schedule,
        6,
    )?;
    steps.extend(proposed.audit_steps);

    let current_take_home = current.breakdown.take_home;
    let proposed_take_home = proposed.breakdown.take_home;

    Ok(SimulationResult {
        simulation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        current_take_home,
        proposed_take_home,
        delta: proposed_take_home - current_take_home,
        current: current.breakdown,
        proposed: proposed.breakdown,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}
