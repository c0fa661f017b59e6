//! Time utilities: parsing HH:MM, comparing session windows, durations.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// True for a zero-padded 24-hour `HH:MM` value.
pub fn is_hhmm(t: &str) -> bool {
    let b = t.as_bytes();
    b.len() == 5
        && b[2] == b':'
        && b[..2].iter().chain(&b[3..]).all(u8::is_ascii_digit)
        && parse_time(t).is_some()
}

/// Wall-clock instant formatted the way timetable files write times.
pub fn format_hhmm(now: &NaiveDateTime) -> String {
    format!("{:02}:{:02}", now.hour(), now.minute())
}

/// A session is current when `start <= now <= end`, both ends inclusive.
/// Zero-padded `HH:MM` strings order the same as the times they denote, so
/// the comparison is lexical and cannot fail.
pub fn is_current_session(start: &str, end: &str, now: &str) -> bool {
    start <= now && now <= end
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// Length of a session in minutes, when both bounds parse and end >= start.
pub fn session_minutes(start: &str, end: &str) -> Option<i64> {
    let (s, e) = (parse_time(start)?, parse_time(end)?);
    let mins = minutes_between(s, e);
    (mins >= 0).then_some(mins)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        if !is_hhmm(s) {
            return Err(AppError::InvalidTime(s.to_string()));
        }
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}
