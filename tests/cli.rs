//! End-to-end runs of the agecalc binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn agecalc() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agecalc"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn text_report_for_fixed_dates() {
    agecalc()
        .args(["1990-06-20", "--today", "2024-06-15", "--no-animate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Age: 33 years, 11 months, 26 days"))
        .stdout(predicate::str::contains(
            "Lived: 12,414 days | 297,936 hours | 17,876,160 minutes",
        ))
        .stdout(predicate::str::contains("Next birthday: June 20, 2024 (in 5 days)"))
        .stdout(predicate::str::contains("Zodiac sign: ♊ Gemini"))
        .stdout(predicate::str::contains(
            "You've experienced 33 New Year celebrations!",
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn day_before_birthday_mentions_tomorrow() {
    agecalc()
        .args(["1995-03-10", "--today", "2024-03-09", "--no-animate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🎂 Your birthday is tomorrow!"));
}

#[test]
fn future_birth_date_is_rejected() {
    agecalc()
        .args(["2030-01-01", "--today", "2024-06-15", "--no-animate"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "error: Birth date cannot be in the future",
        ))
        .stdout(predicate::str::contains("Age:").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_birth_date_is_rejected() {
    agecalc()
        .args(["--today", "2024-06-15", "--no-animate"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("error: Please select your birth date"));
}

#[test]
fn json_output() {
    let output = agecalc()
        .args(["2000-01-01", "--today", "2000-01-01", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["age"], "0 years, 0 months, 0 days");
    assert_eq!(json["report"]["total_days"], 0);
    assert_eq!(json["report"]["next_anniversary"], "2001-01-01");
    assert_eq!(json["report"]["days_until_anniversary"], 366);
    assert_eq!(json["report"]["zodiac_sign"], "Capricorn");
    assert_eq!(json["facts"].as_array().unwrap().len(), 4);
}

#[test]
fn json_rejection_goes_to_stderr() {
    agecalc()
        .args(["not-a-date", "--format", "json"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not-a-date"));
}

#[test]
fn svg_cards_written_to_out_dir() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("cards");

    agecalc()
        .args(["1990-06-20", "--today", "2024-06-15", "--format", "svg"])
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success();

    let dark = fs::read_to_string(out.join("age_dark.svg")).unwrap();
    let light = fs::read_to_string(out.join("age_light.svg")).unwrap();
    assert!(dark.contains("#161b22"));
    assert!(light.contains("#ffffff"));
    assert!(dark.contains("33 years, 11 months, 26 days"));
}

#[test]
fn config_file_supplies_defaults() {
    let tmp = tempdir().unwrap();
    let config = tmp.path().join("agecalc.toml");
    fs::write(
        &config,
        r#"
birth_date = "2000-02-29"
leap_day = "mar1"
format = "json"
"#,
    )
    .unwrap();

    let output = agecalc()
        .arg("--config")
        .arg(&config)
        .args(["--today", "2023-02-28"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["report"]["next_anniversary"], "2023-03-01");
    assert_eq!(json["report"]["days_until_anniversary"], 1);
}

#[test]
fn interactive_mode_handles_each_line() {
    agecalc()
        .args(["--interactive", "--today", "2024-06-15", "--no-animate"])
        .write_stdin("1990-06-20\n\n2030-01-01\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Age: 33 years, 11 months, 26 days"))
        .stdout(predicate::str::contains("error: Please select your birth date"))
        .stdout(predicate::str::contains(
            "error: Birth date cannot be in the future",
        ));
}
