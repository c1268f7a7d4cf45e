//! Holiday calendar capability.
//!
//! Public-holiday determination is delegated to an external calendar; the
//! calculator only consumes a yes/no answer and an optional display name.
//! The [`HolidayCalendar`] trait keeps the core free of any specific
//! calendar library or locale dataset, and lets tests inject synthetic
//! holidays.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashMap;

/// Answers whether a date is a public holiday in the applicable jurisdiction.
pub trait HolidayCalendar {
    /// Returns true when the date is a public holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;

    /// Returns the holiday's display name, if any.
    fn holiday_name(&self, date: NaiveDate) -> Option<String>;
}

/// A calendar with no public holidays; weekends still count as special days.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }

    fn holiday_name(&self, _date: NaiveDate) -> Option<String> {
        None
    }
}

/// A calendar backed by an explicit date-to-name map.
///
/// Used both as the test double and to carry per-request holiday lists
/// supplied by API callers.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::{FixedHolidayCalendar, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let new_years_day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let calendar: FixedHolidayCalendar =
///     [(new_years_day, "元日".to_string())].into_iter().collect();
///
/// assert!(calendar.is_holiday(new_years_day));
/// assert_eq!(calendar.holiday_name(new_years_day), Some("元日".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedHolidayCalendar {
    holidays: HashMap<NaiveDate, String>,
}

impl FixedHolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday to the calendar.
    pub fn add(&mut self, date: NaiveDate, name: impl Into<String>) {
        self.holidays.insert(date, name.into());
    }
}

impl FromIterator<(NaiveDate, String)> for FixedHolidayCalendar {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, String)>>(iter: I) -> Self {
        Self {
            holidays: iter.into_iter().collect(),
        }
    }
}

impl HolidayCalendar for FixedHolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    fn holiday_name(&self, date: NaiveDate) -> Option<String> {
        self.holidays.get(&date).cloned()
    }
}

/// Returns true when the date is a weekend or a public holiday.
///
/// Special days override all time-of-day banding with the flat
/// weekend/holiday rate.
pub fn is_special_day(date: NaiveDate, calendar: &dyn HolidayCalendar) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun) || calendar.is_holiday(date)
}
