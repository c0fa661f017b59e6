use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{missing_config, rtt, setup_data_dir, setup_test_dir};

#[test]
fn test_lookup_prints_sessions() {
    let dir = setup_data_dir("cli_lookup_text");
    let data = dir.to_string_lossy().to_string();

    rtt()
        .args([
            "--config",
            &missing_config(&dir),
            "--data-dir",
            &data,
            "lookup",
            "Alice",
            "--day",
            "Monday",
            "--at",
            "10:15",
        ])
        .assert()
        .success()
        .stdout(contains("Maths"))
        .stdout(contains("English"))
        .stdout(contains("Science"))
        .stdout(contains("00:50"))
        .stdout(contains("Art").not());
}

#[test]
fn test_lookup_json_flags_current_session() {
    let dir = setup_data_dir("cli_lookup_json");
    let data = dir.to_string_lossy().to_string();

    let output = rtt()
        .args([
            "--config",
            &missing_config(&dir),
            "--data-dir",
            &data,
            "lookup",
            "Alice",
            "--day",
            "Monday",
            "--at",
            "10:15",
            "--json",
        ])
        .output()
        .expect("run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["day"], "Monday");
    assert_eq!(json["results"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["results"][0]["current"], false);
    assert_eq!(json["results"][1]["subject"], "English");
    assert_eq!(json["results"][1]["current"], true);
    assert_eq!(
        json["time_options"],
        serde_json::json!(["09:00", "10:00", "11:00"])
    );
}

#[test]
fn test_lookup_without_sessions_reports_error() {
    let dir = setup_data_dir("cli_lookup_nomatch");
    let data = dir.to_string_lossy().to_string();

    rtt()
        .args([
            "--config",
            &missing_config(&dir),
            "--data-dir",
            &data,
            "lookup",
            "Cara",
            "--day",
            "Monday",
        ])
        .assert()
        .success()
        .stderr(contains("No pupil sessions found on Monday."));
}

#[test]
fn test_lookup_unknown_pupil() {
    let dir = setup_data_dir("cli_lookup_unknown");
    let data = dir.to_string_lossy().to_string();

    rtt()
        .args([
            "--config",
            &missing_config(&dir),
            "--data-dir",
            &data,
            "lookup",
            "Zed",
            "--day",
            "Monday",
        ])
        .assert()
        .success()
        .stdout(contains("No pupil named 'Zed'"));
}

#[test]
fn test_lookup_missing_day_file_is_not_fatal() {
    let dir = setup_data_dir("cli_lookup_missing_day");
    let data = dir.to_string_lossy().to_string();

    rtt()
        .args([
            "--config",
            &missing_config(&dir),
            "--data-dir",
            &data,
            "lookup",
            "Alice",
            "--day",
            "Thursday",
        ])
        .assert()
        .success()
        .stderr(contains("Thursday.csv not found."))
        .stderr(contains("No pupil sessions found on Thursday."));
}

#[test]
fn test_lookup_rejects_invalid_time() {
    let dir = setup_data_dir("cli_lookup_bad_time");
    let data = dir.to_string_lossy().to_string();

    rtt()
        .args([
            "--config",
            &missing_config(&dir),
            "--data-dir",
            &data,
            "lookup",
            "Alice",
            "--at",
            "25:99",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 25:99"));
}

#[test]
fn test_times_lists_distinct_start_times() {
    let dir = setup_data_dir("cli_times");
    let data = dir.to_string_lossy().to_string();

    rtt()
        .args([
            "--config",
            &missing_config(&dir),
            "--data-dir",
            &data,
            "times",
            "--day",
            "Monday",
        ])
        .assert()
        .success()
        .stdout(contains("  09:00\n  10:00\n  11:00\n"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = setup_test_dir("cli_init");
    let conf = dir.join("rtimetable.conf");
    let conf_s = conf.to_string_lossy().to_string();
    let data = dir.join("data").to_string_lossy().to_string();

    rtt()
        .args(["--config", &conf_s, "--data-dir", &data, "init"])
        .assert()
        .success()
        .stdout(contains("Config file:"));

    assert!(conf.exists());
    assert!(dir.join("data").is_dir());
    let content = fs::read_to_string(&conf).expect("read config");
    assert!(content.contains("roster_file: ClassData.csv"));

    rtt()
        .args(["--config", &conf_s, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn test_config_check_and_migrate() {
    let dir = setup_test_dir("cli_config_migrate");
    let conf = dir.join("rtimetable.conf");
    let conf_s = conf.to_string_lossy().to_string();
    fs::write(&conf, "port: 8080\nroster_file: Pupils.csv\n").expect("write config");

    rtt()
        .args(["--config", &conf_s, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("data_dir").and(contains("school_days")));

    rtt()
        .args(["--config", &conf_s, "config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Configuration migrated"));

    let content = fs::read_to_string(&conf).expect("read config");
    assert!(content.contains("port: 8080"));
    assert!(content.contains("roster_file: Pupils.csv"));
    assert!(content.contains("school_days:"));

    rtt()
        .args(["--config", &conf_s, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));
}

#[test]
fn test_config_print_uses_file_values() {
    let dir = setup_test_dir("cli_config_print");
    let conf = dir.join("rtimetable.conf");
    let conf_s = conf.to_string_lossy().to_string();
    fs::write(&conf, "host: 0.0.0.0\nport: 8081\n").expect("write config");

    rtt()
        .args(["--config", &conf_s, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("port: 8081"))
        .stdout(contains("0.0.0.0"))
        .stdout(contains("log_level: info"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = setup_test_dir("cli_config_invalid");
    let conf = dir.join("rtimetable.conf");
    let conf_s = conf.to_string_lossy().to_string();
    fs::write(&conf, "school_days: []\n").expect("write config");

    rtt()
        .args(["--config", &conf_s, "times"])
        .assert()
        .failure()
        .stderr(contains("school_days must list at least one day"));
}
