//! Core data models for the Per-Diem Simulation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod age_bracket;
mod audit;
mod input;
mod result;

pub use age_bracket::AgeBracket;
pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use input::SimulationInput;
pub use result::{DeductionBreakdown, Scenario, SimulationResult};
