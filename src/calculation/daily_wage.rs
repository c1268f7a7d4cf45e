//! Per-day wage calculation and whole-schedule estimation.

use crate::config::WageRateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{DailyResult, RateBand, RateSegment, ScheduleSummary, ShiftRecord};

use super::bands::weekday_bands;
use super::holiday::{HolidayCalendar, is_special_day};
use super::overlap_minutes;

/// Calculates the wage breakdown for one shift record.
///
/// Pure function of its inputs. On a weekend or public holiday the entire
/// shift is billed as a single flat-rate segment; on a weekday the shift is
/// intersected with the three time-of-day bands and one segment is emitted
/// per non-empty overlap, in band order.
///
/// # Errors
///
/// Returns [`EngineError::InvalidShift`] when the record's end time is not
/// strictly after its start time. Overnight shifts are not supported; a
/// reversed time pair is rejected rather than wrapped past midnight.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::{NoHolidays, calculate_daily_wage};
/// use wage_engine::config::WageRateTable;
/// use wage_engine::models::{RateBand, ShiftRecord};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// // Thursday 17:00-20:00: one evening segment, 3h × 1290 = 3870
/// let record = ShiftRecord {
///     date: NaiveDate::from_ymd_opt(2025, 12, 18).unwrap(),
///     start_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
/// };
///
/// let result = calculate_daily_wage(&record, &NoHolidays, &WageRateTable::default()).unwrap();
/// assert_eq!(result.segments.len(), 1);
/// assert_eq!(result.segments[0].band, RateBand::Evening);
/// assert_eq!(result.total_amount, Decimal::from(3870));
/// ```
pub fn calculate_daily_wage(
    record: &ShiftRecord,
    calendar: &dyn HolidayCalendar,
    rates: &WageRateTable,
) -> EngineResult<DailyResult> {
    record.validate()?;

    let start = record.start_minutes();
    let end = record.end_minutes();
    let total_minutes = end - start;

    // Weekend or holiday: one flat-rate segment, no banding.
    if is_special_day(record.date, calendar) {
        let segment = RateSegment::new(RateBand::WeekendHoliday, total_minutes, rates.weekend_holiday);
        let total_amount = segment.amount;
        return Ok(DailyResult {
            date: record.date,
            start_time: record.start_time,
            end_time: record.end_time,
            total_minutes,
            segments: vec![segment],
            total_amount,
            holiday_name: calendar.holiday_name(record.date),
        });
    }

    let mut segments = Vec::with_capacity(3);
    for (band, band_start, band_end, rate) in weekday_bands(rates) {
        let minutes = overlap_minutes(start, end, band_start, band_end);
        if minutes > 0 {
            segments.push(RateSegment::new(band, minutes, rate));
        }
    }

    let total_amount = segments.iter().map(|s| s.amount).sum();
    Ok(DailyResult {
        date: record.date,
        start_time: record.start_time,
        end_time: record.end_time,
        total_minutes,
        segments,
        total_amount,
        holiday_name: None,
    })
}

/// Estimates wages for a whole parsed schedule.
///
/// Computes a [`DailyResult`] per record, sorts the results by date for
/// display, and aggregates the totals. Every record is processed
/// independently; the aggregate is a plain sum.
///
/// # Errors
///
/// Returns [`EngineError::NoShiftData`] when `records` is empty, and
/// propagates [`EngineError::InvalidShift`] from any degenerate record.
pub fn estimate_schedule(
    records: &[ShiftRecord],
    calendar: &dyn HolidayCalendar,
    rates: &WageRateTable,
) -> EngineResult<(Vec<DailyResult>, ScheduleSummary)> {
    if records.is_empty() {
        return Err(EngineError::NoShiftData);
    }

    let mut results = records
        .iter()
        .map(|record| calculate_daily_wage(record, calendar, rates))
        .collect::<EngineResult<Vec<_>>>()?;
    results.sort_by_key(|r| r.date);

    let summary = ScheduleSummary::from_results(&results);
    Ok((results, summary))
}
