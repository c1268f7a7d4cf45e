//! Shift record model.
//!
//! This module defines the ShiftRecord struct, one parsed row of a pasted
//! shift schedule: a calendar date plus a start/end time pair at minute
//! granularity.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Japanese single-character weekday labels, Monday first.
const WEEKDAY_LABELS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// One parsed row of the input schedule.
///
/// Invariant: `end_time` is strictly after `start_time` within the same day.
/// Overnight shifts are not representable. The parser emits records without
/// enforcing this; [`ShiftRecord::validate`] (called by the calculator)
/// rejects violations.
///
/// # Example
///
/// ```
/// use wage_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let record = ShiftRecord {
///     date: NaiveDate::from_ymd_opt(2025, 12, 18).unwrap(),
///     start_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
/// };
/// assert_eq!(record.total_minutes(), 180);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start_time: NaiveTime,
    /// The end time of the shift.
    pub end_time: NaiveTime,
}

impl ShiftRecord {
    /// Returns the shift duration in minutes (end minus start).
    ///
    /// Negative if the record violates the end-after-start invariant.
    pub fn total_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Returns the start time as minutes since midnight.
    pub fn start_minutes(&self) -> i64 {
        i64::from(self.start_time.num_seconds_from_midnight()) / 60
    }

    /// Returns the end time as minutes since midnight.
    pub fn end_minutes(&self) -> i64 {
        i64::from(self.end_time.num_seconds_from_midnight()) / 60
    }

    /// Checks the end-after-start invariant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] when the end time is not
    /// strictly after the start time.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_time <= self.start_time {
            return Err(EngineError::InvalidShift {
                date: self.date,
                message: format!(
                    "end time {} is not after start time {}",
                    self.end_time.format("%H:%M"),
                    self.start_time.format("%H:%M"),
                ),
            });
        }
        Ok(())
    }

    /// Returns the Japanese single-character label for the shift's weekday.
    pub fn weekday_label(&self) -> &'static str {
        WEEKDAY_LABELS[self.date.weekday().num_days_from_monday() as usize]
    }

    /// Renders the record back into a canonical schedule line.
    ///
    /// The rendered line (`MM/DD(曜日)\tHH:MM～HH:MM`) is itself parseable,
    /// and re-parsing it yields an equal record as long as the reference date
    /// resolves to the same year.
    ///
    /// # Example
    ///
    /// ```
    /// use wage_engine::models::ShiftRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let record = ShiftRecord {
    ///     date: NaiveDate::from_ymd_opt(2025, 12, 18).unwrap(),
    ///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
    /// };
    /// assert_eq!(record.to_schedule_line(), "12/18(木)\t09:00～18:00");
    /// ```
    pub fn to_schedule_line(&self) -> String {
        format!(
            "{:02}/{:02}({})\t{}～{}",
            self.date.month(),
            self.date.day(),
            self.weekday_label(),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
        )
    }

    /// Returns true when the shift falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}
