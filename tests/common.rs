#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rtimetable::models::roster::Roster;
use rtimetable::models::session::SessionTable;
use rtimetable::tables::StaticTableSource;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtt() -> Command {
    cargo_bin_cmd!("rtimetable")
}

/// Create a fresh, empty directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimetable", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Test dir with a roster and a Monday timetable
pub fn setup_data_dir(name: &str) -> PathBuf {
    let dir = setup_test_dir(name);
    fs::write(dir.join("ClassData.csv"), "Alice,Y7\nBob,Y8\nCara,Y9\n").expect("write roster");
    fs::write(
        dir.join("Monday.csv"),
        "Y7,09:00,Maths,A,Room1,09:50\n\
         Y8,09:00,Art,B,Room2,09:50\n\
         Y7,10:00,English,B,Room3,10:50\n\
         Y7,11:00,Science,C,Lab1,11:50\n",
    )
    .expect("write monday");
    dir
}

/// Path of a config file that does not exist, so defaults are used
pub fn missing_config(dir: &PathBuf) -> String {
    dir.join("none.conf").to_string_lossy().to_string()
}

pub fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid date")
        .and_time(NaiveTime::from_hms_opt(hh, mm, 0).expect("valid time"))
}

/// 2025-09-01 is a Monday
pub fn monday_at(hh: u32, mm: u32) -> NaiveDateTime {
    at(2025, 9, 1, hh, mm)
}

pub fn monday_table() -> SessionTable {
    SessionTable::from_records(vec![
        vec!["Y7", "09:00", "Maths", "A", "Room1", "09:50"],
        vec!["Y8", "09:00", "Art", "B", "Room2", "09:50"],
    ])
}

pub fn source_with(roster: &[(&str, &str)]) -> StaticTableSource {
    StaticTableSource::new(Roster::from_iter(roster.iter().copied()))
        .with_day("Monday", monday_table())
}
