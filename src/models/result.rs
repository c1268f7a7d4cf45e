//! Wage calculation result models.
//!
//! This module contains the [`RateSegment`] and [`DailyResult`] types that
//! capture the per-day wage breakdown, plus the [`ScheduleSummary`] aggregate
//! over a whole schedule.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies the wage-rate band a segment was billed under.
///
/// Weekday shifts are split across the three time-of-day bands; weekend and
/// holiday shifts are billed as a single [`RateBand::WeekendHoliday`] segment
/// regardless of time of day.
///
/// # Example
///
/// ```
/// use wage_engine::models::RateBand;
///
/// assert_eq!(RateBand::Evening.to_string(), "17:00〜");
/// assert_eq!(RateBand::WeekendHoliday.to_string(), "土日祝");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBand {
    /// Weekday hours before 13:00, at the base rate.
    Morning,
    /// Weekday hours from 13:00 to 17:00.
    Afternoon,
    /// Weekday hours from 17:00 onward.
    Evening,
    /// Any hours on a weekend or public holiday.
    WeekendHoliday,
}

impl std::fmt::Display for RateBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Labels match the source calendar export's notation.
        match self {
            RateBand::Morning => write!(f, "〜13:00"),
            RateBand::Afternoon => write!(f, "13:00〜17:00"),
            RateBand::Evening => write!(f, "17:00〜"),
            RateBand::WeekendHoliday => write!(f, "土日祝"),
        }
    }
}

/// One contiguous sub-interval of a shift billed at a single rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSegment {
    /// The rate band this segment falls in.
    pub band: RateBand,
    /// The duration of the segment in minutes.
    pub minutes: i64,
    /// The hourly rate applied to this segment.
    pub rate: Decimal,
    /// The wage amount for this segment: minutes / 60 × rate.
    pub amount: Decimal,
}

impl RateSegment {
    /// Creates a segment, computing its amount from duration and rate.
    ///
    /// Multiplies before dividing so that amounts for durations divisible
    /// into the rate stay exact.
    pub fn new(band: RateBand, minutes: i64, rate: Decimal) -> Self {
        let amount = Decimal::from(minutes) * rate / Decimal::from(60);
        Self {
            band,
            minutes,
            rate,
            amount,
        }
    }
}

/// The complete wage breakdown for one shift.
///
/// Invariants: segment minutes sum to `total_minutes`; segments appear in
/// chronological band order; `total_amount` is the sum of segment amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyResult {
    /// The date of the shift.
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start_time: NaiveTime,
    /// The end time of the shift.
    pub end_time: NaiveTime,
    /// The total shift duration in minutes.
    pub total_minutes: i64,
    /// The rate-banded breakdown, in chronological band order.
    pub segments: Vec<RateSegment>,
    /// The total wage amount for the day.
    pub total_amount: Decimal,
    /// The public holiday name, when the calendar reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
}

/// Aggregate totals over an estimated schedule.
///
/// Summation is associative and commutative, so the aggregate does not
/// depend on the order daily results were produced in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Total worked minutes across all shifts.
    pub total_minutes: i64,
    /// Total estimated wage across all shifts.
    pub total_amount: Decimal,
    /// The number of shift records included.
    pub record_count: usize,
}

impl ScheduleSummary {
    /// Builds the aggregate from a slice of daily results.
    pub fn from_results(results: &[DailyResult]) -> Self {
        Self {
            total_minutes: results.iter().map(|r| r.total_minutes).sum(),
            total_amount: results.iter().map(|r| r.total_amount).sum(),
            record_count: results.len(),
        }
    }
}
