//! HTTP API for the wage estimation engine.
//!
//! Provides the `/estimate` endpoint and its supporting types. The API is
//! the thin orchestration layer: it feeds parser output into the calculator
//! and returns the aggregated results.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EstimateRequest, HolidayRequest};
pub use response::{ApiError, EstimateResponse};
pub use state::AppState;
