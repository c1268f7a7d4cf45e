//! Weekday rate bands and interval overlap.
//!
//! Weekday shifts are billed across three fixed time-of-day bands. The
//! boundaries are not configurable; only the rates in
//! [`WageRateTable`](crate::config::WageRateTable) are.

use rust_decimal::Decimal;

use crate::config::WageRateTable;
use crate::models::RateBand;

/// Start of the afternoon band (13:00) in minutes since midnight.
pub const AFTERNOON_START_MINUTES: i64 = 13 * 60;

/// Start of the evening band (17:00) in minutes since midnight.
pub const EVENING_START_MINUTES: i64 = 17 * 60;

/// End of the day (24:00) in minutes since midnight.
const DAY_END_MINUTES: i64 = 24 * 60;

/// The three weekday bands in chronological order, with their rates.
pub(crate) fn weekday_bands(rates: &WageRateTable) -> [(RateBand, i64, i64, Decimal); 3] {
    [
        (RateBand::Morning, 0, AFTERNOON_START_MINUTES, rates.base),
        (
            RateBand::Afternoon,
            AFTERNOON_START_MINUTES,
            EVENING_START_MINUTES,
            rates.weekday_afternoon,
        ),
        (
            RateBand::Evening,
            EVENING_START_MINUTES,
            DAY_END_MINUTES,
            rates.weekday_evening,
        ),
    ]
}

/// Returns the overlap between two half-open minute intervals, in minutes.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::overlap_minutes;
///
/// // 10:00-18:00 against the 13:00-17:00 band
/// assert_eq!(overlap_minutes(600, 1080, 780, 1020), 240);
/// // No overlap
/// assert_eq!(overlap_minutes(540, 720, 780, 1020), 0);
/// ```
pub fn overlap_minutes(start: i64, end: i64, band_start: i64, band_end: i64) -> i64 {
    (end.min(band_end) - start.max(band_start)).max(0)
}
