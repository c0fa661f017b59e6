use crate::errors::{AppError, AppResult};
use crate::utils::date::weekday_of;
use chrono::NaiveDateTime;

/// The days a timetable exists for, in week order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolWeek {
    days: Vec<String>,
}

impl Default for SchoolWeek {
    fn default() -> Self {
        Self {
            days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

impl SchoolWeek {
    pub fn new(days: Vec<String>) -> AppResult<Self> {
        if days.is_empty() {
            return Err(AppError::Config(
                "a school week needs at least one day".to_string(),
            ));
        }
        Ok(Self { days })
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn first_day(&self) -> &str {
        // non-empty, checked in new()
        self.days.first().map(String::as_str).unwrap_or("Monday")
    }

    /// Configured spelling of `day`, compared case-insensitively.
    pub fn find(&self, day: &str) -> Option<&str> {
        self.days
            .iter()
            .find(|d| d.eq_ignore_ascii_case(day))
            .map(String::as_str)
    }

    pub fn contains(&self, day: &str) -> bool {
        self.find(day).is_some()
    }

    /// Today's weekday when it is a school day, otherwise the first day of
    /// the week (weekends fall back to Monday with the default week).
    pub fn default_day(&self, now: &NaiveDateTime) -> String {
        self.find(weekday_of(now))
            .unwrap_or_else(|| self.first_day())
            .to_string()
    }
}
