//! HTTP API module for the Per-Diem Simulation Engine.
//!
//! This module provides the REST API endpoint for running take-home
//! delta simulations against the loaded fiscal schedule.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SimulationRequest;
pub use response::{ApiError, BreakdownResponse, SimulationResponse};
pub use state::AppState;
