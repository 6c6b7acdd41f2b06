//! Calculation logic for the Per-Diem Simulation Engine.
//!
//! This module contains all the calculation rules for the tax-savings
//! simulation: the non-taxable allowance total, social-insurance premium
//! lines, progressive income tax, resident tax, per-scenario take-home
//! aggregation, and the top-level delta computation.

mod allowance;
mod delta;
mod income_tax;
mod insurance;
mod resident_tax;
mod take_home;

pub use allowance::{AllowanceResult, calculate_nontaxable_allowance};
pub use delta::{DEGENERATE_ALLOWANCE_CODE, compute_delta};
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use insurance::{InsurancePremiums, calculate_insurance_premiums};
pub use resident_tax::{ResidentTaxResult, calculate_resident_tax};
pub use take_home::{TakeHomeResult, calculate_take_home};
