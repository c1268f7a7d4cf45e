//! Data models for the wage estimation engine.

mod result;
mod shift;

pub use result::{DailyResult, RateBand, RateSegment, ScheduleSummary};
pub use shift::ShiftRecord;
