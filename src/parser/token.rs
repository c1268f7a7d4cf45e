//! Token scanners for schedule lines.
//!
//! Small hand-rolled matchers, one per token shape, so line parsing stays
//! testable independent of any text-matching library. Each scanner searches
//! the whole line and returns the first match, trying the longer digit run
//! before the shorter one at every position.

use chrono::NaiveTime;

/// The wide-dash characters accepted between the two times of a range.
const TIME_SEPARATORS: [char; 2] = ['～', '〜'];

/// Scans for a date token `M/D(label)` where `M` and `D` are 1-2 digits and
/// `label` is any non-empty run of characters other than `)`.
///
/// Returns the month and day numbers of the first match. The numbers are not
/// range-checked here; calendar validation happens when the caller builds a
/// `NaiveDate`.
pub(crate) fn match_date_token(line: &str) -> Option<(u32, u32)> {
    let chars: Vec<char> = line.chars().collect();
    for start in 0..chars.len() {
        if let Some((month, day)) = match_date_at(&chars, start) {
            return Some((month, day));
        }
    }
    None
}

fn match_date_at(chars: &[char], start: usize) -> Option<(u32, u32)> {
    for month_len in [2, 1] {
        let Some((month, mut pos)) = take_digits(chars, start, month_len) else {
            continue;
        };
        if chars.get(pos) != Some(&'/') {
            continue;
        }
        pos += 1;
        for day_len in [2, 1] {
            let Some((day, mut pos)) = take_digits(chars, pos, day_len) else {
                continue;
            };
            if chars.get(pos) != Some(&'(') {
                continue;
            }
            pos += 1;
            // Label: at least one character before the closing paren.
            let label_start = pos;
            while pos < chars.len() && chars[pos] != ')' {
                pos += 1;
            }
            if pos > label_start && chars.get(pos) == Some(&')') {
                return Some((month, day));
            }
        }
    }
    None
}

/// Scans for a time-range token `H:MM(～|〜)H:MM` where `H` is 1-2 digits.
///
/// Returns the first match as a pair of times. Matches whose numbers do not
/// form a valid time of day (e.g. `25:99`) are rejected, which makes the
/// caller skip the line.
pub(crate) fn match_time_range(line: &str) -> Option<(NaiveTime, NaiveTime)> {
    let chars: Vec<char> = line.chars().collect();
    for start in 0..chars.len() {
        if let Some(range) = match_time_range_at(&chars, start) {
            return Some(range);
        }
    }
    None
}

fn match_time_range_at(chars: &[char], start: usize) -> Option<(NaiveTime, NaiveTime)> {
    let (start_hm, pos) = match_clock(chars, start)?;
    let sep = chars.get(pos)?;
    if !TIME_SEPARATORS.contains(sep) {
        return None;
    }
    let (end_hm, _) = match_clock(chars, pos + 1)?;

    let start_time = NaiveTime::from_hms_opt(start_hm.0, start_hm.1, 0)?;
    let end_time = NaiveTime::from_hms_opt(end_hm.0, end_hm.1, 0)?;
    Some((start_time, end_time))
}

/// Matches `H:MM` (hour 1-2 digits, minute exactly 2) at a position.
fn match_clock(chars: &[char], start: usize) -> Option<((u32, u32), usize)> {
    for hour_len in [2, 1] {
        let Some((hour, pos)) = take_digits(chars, start, hour_len) else {
            continue;
        };
        if chars.get(pos) != Some(&':') {
            continue;
        }
        if let Some((minute, pos)) = take_digits(chars, pos + 1, 2) {
            return Some(((hour, minute), pos));
        }
    }
    None
}

/// Reads exactly `len` ASCII digits starting at `start`.
///
/// Returns the parsed number and the position after the digits.
fn take_digits(chars: &[char], start: usize, len: usize) -> Option<(u32, usize)> {
    let end = start + len;
    if end > chars.len() {
        return None;
    }
    let mut value = 0u32;
    for &c in &chars[start..end] {
        value = value * 10 + c.to_digit(10)?;
    }
    Some((value, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_date_token_two_digit() {
        assert_eq!(match_date_token("12/18(木)\t17:00～20:00"), Some((12, 18)));
    }

    #[test]
    fn test_date_token_one_digit() {
        assert_eq!(match_date_token("1/3(土) 13:00〜17:30"), Some((1, 3)));
    }

    #[test]
    fn test_date_token_requires_label() {
        assert_eq!(match_date_token("12/18() 09:00～17:00"), None);
    }

    #[test]
    fn test_date_token_requires_closing_paren() {
        assert_eq!(match_date_token("12/18(木 09:00～17:00"), None);
    }

    #[test]
    fn test_date_token_absent() {
        assert_eq!(match_date_token("09:00～17:00"), None);
    }

    #[test]
    fn test_date_token_does_not_range_check() {
        // Calendar validation is the caller's job.
        assert_eq!(match_date_token("13/40(x)"), Some((13, 40)));
    }

    #[test]
    fn test_date_token_backtracks_over_long_digit_runs() {
        // Three digits before the slash: the scanner finds "23/18(月)".
        assert_eq!(match_date_token("123/18(月)"), Some((23, 18)));
    }

    #[test]
    fn test_time_range_fullwidth_tilde() {
        assert_eq!(
            match_time_range("12/18(木)\t17:00～20:00"),
            Some((time(17, 0), time(20, 0)))
        );
    }

    #[test]
    fn test_time_range_wave_dash() {
        assert_eq!(
            match_time_range("13:00〜17:30"),
            Some((time(13, 0), time(17, 30)))
        );
    }

    #[test]
    fn test_time_range_one_digit_hour() {
        assert_eq!(
            match_time_range("9:00～17:00"),
            Some((time(9, 0), time(17, 0)))
        );
    }

    #[test]
    fn test_time_range_rejects_ascii_dash() {
        assert_eq!(match_time_range("09:00-17:00"), None);
    }

    #[test]
    fn test_time_range_rejects_invalid_clock() {
        assert_eq!(match_time_range("25:99～26:00"), None);
    }

    #[test]
    fn test_time_range_requires_two_digit_minutes() {
        assert_eq!(match_time_range("9:0～17:00"), None);
    }

    #[test]
    fn test_time_range_absent() {
        assert_eq!(match_time_range("12/18(木)"), None);
    }
}
