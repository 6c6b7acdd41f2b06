//! Per-Diem Tax-Savings Simulation Engine
//!
//! This crate simulates the take-home pay effect of reclassifying part of an
//! employee's compensation as non-taxable travel per-diem under the Japanese
//! income tax and social insurance schedules. Given an annual income, an age
//! bracket, and a proposed per-diem schedule, it computes current net pay,
//! projected net pay, and the annual delta with itemized deduction lines.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
