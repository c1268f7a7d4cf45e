//! Request types for the `/estimate` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::FixedHolidayCalendar;

/// Request body for the `/estimate` endpoint.
///
/// Carries the pasted schedule text plus the calendar context the core needs:
/// an optional reference date for year resolution and the public holidays
/// that fall within the schedule's range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// The pasted shift-schedule text, one shift per line.
    pub schedule_text: String,
    /// Reference date for resolving the year of `MM/DD` dates.
    /// Defaults to today's local date.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Public holidays to treat as special days.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
}

/// One public holiday in an estimation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The holiday's display name.
    pub name: String,
}

impl EstimateRequest {
    /// Builds the holiday calendar injected into the calculator.
    pub fn holiday_calendar(&self) -> FixedHolidayCalendar {
        self.holidays
            .iter()
            .map(|h| (h.date, h.name.clone()))
            .collect()
    }
}
