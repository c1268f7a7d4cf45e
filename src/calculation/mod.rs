//! Wage calculation logic.
//!
//! This module contains the holiday-calendar capability used to classify
//! special days, the weekday rate-band table, the per-day wage calculator,
//! and the whole-schedule estimation that aggregates daily results.

mod bands;
mod daily_wage;
mod holiday;

pub use bands::{AFTERNOON_START_MINUTES, EVENING_START_MINUTES, overlap_minutes};
pub use daily_wage::{calculate_daily_wage, estimate_schedule};
pub use holiday::{FixedHolidayCalendar, HolidayCalendar, NoHolidays, is_special_day};
