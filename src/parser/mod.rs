//! Shift schedule text parser.
//!
//! Converts a block of pasted schedule text (tab- or space-delimited, one
//! shift per line) into an ordered sequence of [`ShiftRecord`]s. Parsing
//! never fails: unrecognized lines, invalid calendar dates, and invalid
//! clock times are silently skipped, and all successfully parsed records are
//! returned in the order their lines appeared.

mod token;

use chrono::{Datelike, NaiveDate};

use crate::models::ShiftRecord;

use token::{match_date_token, match_time_range};

/// Header marker tokens: a line containing both is a column-header row.
const HEADER_DATE: &str = "日付";
const HEADER_HOURS: &str = "勤務時間";

/// Glyphs the source calendar export uses to mark off-days.
const NO_SHIFT_GLYPHS: [char; 2] = ['－', 'ー'];

/// Parses pasted schedule text, resolving years against today's local date.
///
/// See [`parse_schedule_from`] for the parsing rules and the year-resolution
/// heuristic.
pub fn parse_schedule(text: &str) -> Vec<ShiftRecord> {
    parse_schedule_from(text, chrono::Local::now().date_naive())
}

/// Parses pasted schedule text, resolving years against a reference date.
///
/// Per non-empty line, in order:
///
/// 1. Lines containing both the `日付` and `勤務時間` header markers are
///    skipped (column-header row).
/// 2. Lines containing a no-shift placeholder glyph (`－` or `ー`) are
///    skipped (off-day).
/// 3. A date token `MM/DD(weekday)` is extracted; absent, the line is
///    skipped.
/// 4. The year is resolved from `today` (see below); a month/day pair that
///    is not a valid calendar date (e.g. Feb 30) skips the line.
/// 5. A time-range token `HH:MM～HH:MM` (or `〜`) is extracted; absent or
///    not a valid time of day, the line is skipped.
/// 6. A [`ShiftRecord`] is emitted.
///
/// # Year resolution
///
/// The input format carries no year. Starting from `today`'s year, a parsed
/// month more than 6 months before `today`'s month rolls forward one year
/// (a December table pasted in January), and a month more than 6 months
/// after rolls back one year. This is a heuristic, not a guarantee:
/// schedules spanning more than roughly half a year from the reference date
/// resolve to the wrong year.
///
/// # Example
///
/// ```
/// use wage_engine::parser::parse_schedule_from;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
/// let text = "日付\t勤務時間\t労働時間\t休憩時間\n\
///             12/18(木)\t17:00～20:00\t03:00\t00:00\n\
///             01/03(土)\t13:00～17:30\t04:30\t00:00\n";
///
/// let records = parse_schedule_from(text, today);
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2025, 12, 18).unwrap());
/// assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2026, 1, 3).unwrap());
/// ```
pub fn parse_schedule_from(text: &str, today: NaiveDate) -> Vec<ShiftRecord> {
    text.lines()
        .filter_map(|line| parse_line(line, today))
        .collect()
}

/// Parses one schedule line; `None` means the line was skipped.
fn parse_line(line: &str, today: NaiveDate) -> Option<ShiftRecord> {
    if line.trim().is_empty() {
        return None;
    }
    if line.contains(HEADER_DATE) && line.contains(HEADER_HOURS) {
        return None;
    }
    if line.contains(NO_SHIFT_GLYPHS) {
        return None;
    }

    let (month, day) = match_date_token(line)?;
    let year = resolve_year(month, today);
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let (start_time, end_time) = match_time_range(line)?;

    Some(ShiftRecord {
        date,
        start_time,
        end_time,
    })
}

/// Resolves the year for a parsed month relative to the reference date.
fn resolve_year(month: u32, today: NaiveDate) -> i32 {
    let current_month = today.month() as i32;
    let month = month as i32;
    if month < current_month - 6 {
        today.year() + 1
    } else if month > current_month + 6 {
        today.year() - 1
    } else {
        today.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // Reference date used throughout: late December 2025.
    fn today() -> NaiveDate {
        date(2025, 12, 20)
    }

    #[test]
    fn test_parses_tab_delimited_line() {
        let records = parse_schedule_from("12/18(木)\t17:00～20:00\t03:00\t00:00", today());
        assert_eq!(
            records,
            vec![ShiftRecord {
                date: date(2025, 12, 18),
                start_time: time(17, 0),
                end_time: time(20, 0),
            }]
        );
    }

    #[test]
    fn test_parses_space_delimited_line() {
        let records = parse_schedule_from("12/22(月) 9:00〜13:00", today());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].start_time, time(9, 0));
    }

    #[test]
    fn test_skips_header_row() {
        let records = parse_schedule_from("日付\t勤務時間\t労働時間\t休憩時間", today());
        assert!(records.is_empty());
    }

    #[test]
    fn test_header_needs_both_markers() {
        // A line with only one marker token is not a header row; this one
        // also carries no date token, so it is skipped for that reason.
        let records = parse_schedule_from("日付のみの行", today());
        assert!(records.is_empty());
    }

    #[test]
    fn test_skips_no_shift_placeholder() {
        let records = parse_schedule_from("12/19(金)\t－\t00:00\t00:00", today());
        assert!(records.is_empty());

        let records = parse_schedule_from("12/20(土)\tー\t00:00\t00:00", today());
        assert!(records.is_empty());
    }

    #[test]
    fn test_skips_line_without_date() {
        let records = parse_schedule_from("17:00～20:00", today());
        assert!(records.is_empty());
    }

    #[test]
    fn test_skips_line_without_time_range() {
        let records = parse_schedule_from("12/18(木)\t03:00", today());
        assert!(records.is_empty());
    }

    #[test]
    fn test_skips_invalid_calendar_date() {
        let records = parse_schedule_from("02/30(月)\t09:00～17:00", today());
        assert!(records.is_empty());
    }

    #[test]
    fn test_skips_invalid_clock_time() {
        let records = parse_schedule_from("12/18(木)\t25:00～26:00", today());
        assert!(records.is_empty());
    }

    #[test]
    fn test_skips_blank_lines() {
        let records = parse_schedule_from("\n  \n12/18(木)\t17:00～20:00\n\n", today());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_year_rolls_forward_across_new_year() {
        // January in a December table belongs to the next year.
        let records = parse_schedule_from("01/03(土)\t13:00～17:30", today());
        assert_eq!(records[0].date, date(2026, 1, 3));
    }

    #[test]
    fn test_year_rolls_backward_across_new_year() {
        // December in a January table belongs to the previous year.
        let records = parse_schedule_from("12/29(月)\t09:00～12:00", date(2026, 1, 10));
        assert_eq!(records[0].date, date(2025, 12, 29));
    }

    #[test]
    fn test_nearby_months_keep_current_year() {
        let records = parse_schedule_from("11/04(火)\t09:00～12:00", today());
        assert_eq!(records[0].date, date(2025, 11, 4));
    }

    #[test]
    fn test_one_digit_hour_normalized_to_two_digits() {
        let records = parse_schedule_from("12/18(木)\t9:00～17:00", today());
        assert_eq!(records[0].start_time.format("%H:%M").to_string(), "09:00");
    }

    #[test]
    fn test_records_emitted_in_line_order() {
        let text = "12/22(月)\t17:00～20:00\n12/18(木)\t09:00～12:00\n";
        let records = parse_schedule_from(text, today());
        assert_eq!(records.len(), 2);
        // Input order preserved; downstream sorts by date for display.
        assert_eq!(records[0].date, date(2025, 12, 22));
        assert_eq!(records[1].date, date(2025, 12, 18));
    }

    #[test]
    fn test_unrecognized_input_yields_empty_result() {
        let text = "これはシフト表ではありません\nnot a schedule\n123456\n";
        assert!(parse_schedule_from(text, today()).is_empty());
    }

    #[test]
    fn test_trailing_columns_ignored() {
        let records = parse_schedule_from("01/03(土)\t13:00～17:30\t04:30\t00:00", today());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].end_time, time(17, 30));
    }

    #[test]
    fn test_canonical_rendering_reparses_to_same_record() {
        let original = parse_schedule_from("12/18(木)\t17:00～20:00", today());
        let rendered = original[0].to_schedule_line();
        let reparsed = parse_schedule_from(&rendered, today());
        assert_eq!(original, reparsed);
    }
}
