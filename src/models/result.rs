//! Simulation result models for the Per-Diem Simulation Engine.
//!
//! This module contains the [`SimulationResult`] type and the itemized
//! [`DeductionBreakdown`] records that capture all outputs of one
//! `compute_delta` run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuditTrace;

/// The scenario a deduction pass belongs to.
///
/// The current scenario taxes the full annual income; the proposed scenario
/// taxes income reduced by the non-taxable per-diem allowance and adds that
/// allowance back to net pay untaxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Ordinary salary taxation of the full annual income.
    Current,
    /// Part of compensation reclassified as non-taxable per-diem.
    Proposed,
}

impl Scenario {
    /// Returns the snake_case label used in audit payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Current => "current",
            Scenario::Proposed => "proposed",
        }
    }
}

/// Itemized deduction lines for one taxation scenario.
///
/// All figures carry full [`Decimal`] precision; rounding to whole yen
/// happens only at the presentation boundary.
///
/// # Example
///
/// ```
/// use perdiem_engine::models::DeductionBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = DeductionBreakdown {
///     taxable_income: Decimal::from(10_000_000),
///     health_insurance: Decimal::from(494_000),
///     pension_insurance: Decimal::from(915_000),
///     employment_insurance: Decimal::from(30_000),
///     care_insurance: Decimal::ZERO,
///     income_tax: Decimal::from(1_764_000),
///     resident_tax: Decimal::from(1_000_000),
///     non_taxable_allowance: Decimal::ZERO,
///     take_home: Decimal::from(5_797_000),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// The income subjected to tax and insurance in this scenario.
    pub taxable_income: Decimal,
    /// Health insurance premium.
    pub health_insurance: Decimal,
    /// Employees' pension insurance premium.
    pub pension_insurance: Decimal,
    /// Employment insurance premium.
    pub employment_insurance: Decimal,
    /// Long-term-care insurance premium (zero outside ages 40-64).
    pub care_insurance: Decimal,
    /// Progressive national income tax.
    pub income_tax: Decimal,
    /// Flat-rate resident tax.
    pub resident_tax: Decimal,
    /// Non-taxable per-diem added back untaxed (zero in the current scenario).
    pub non_taxable_allowance: Decimal,
    /// Net pay after all deductions plus the allowance add-back.
    pub take_home: Decimal,
}

impl DeductionBreakdown {
    /// Sum of all six statutory deduction lines.
    pub fn total_deductions(&self) -> Decimal {
        self.health_insurance
            + self.pension_insurance
            + self.employment_insurance
            + self.care_insurance
            + self.income_tax
            + self.resident_tax
    }
}

/// The complete result of one per-diem simulation.
///
/// Captures both scenario breakdowns, the take-home delta, and a full
/// audit trace of every rule applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
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
    /// `proposed_take_home - current_take_home`.
    pub delta: Decimal,
    /// Itemized deductions for the current scenario.
    pub current: DeductionBreakdown,
    /// Itemized deductions for the proposed scenario.
    pub proposed: DeductionBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
