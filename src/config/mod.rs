//! Configuration loading and management for the Per-Diem Simulation Engine.
//!
//! This module provides functionality to load fiscal tax schedules from
//! YAML files, including income-tax brackets, insurance premium rates,
//! and the resident tax rate.
//!
//! # Example
//!
//! ```no_run
//! use perdiem_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/jp2024").unwrap();
//! println!("Loaded schedule: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{InsuranceRates, ScheduleMetadata, TaxBracket, TaxSchedule};
