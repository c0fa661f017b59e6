use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// English weekday name, matching the timetable file names ("Monday").
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn weekday_of(now: &NaiveDateTime) -> &'static str {
    weekday_name(now.weekday())
}
