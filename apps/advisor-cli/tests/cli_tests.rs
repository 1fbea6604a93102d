//! End-to-end tests for the `advisor` binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn advisor() -> Command {
    Command::cargo_bin("advisor").unwrap()
}

#[test]
fn demo_prints_five_numbered_recommendations() {
    advisor()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Generated Recommendations:\n"))
        .stdout(predicate::str::contains(
            "1. Priority: Schedule a 1-on-1 session with an academic counselor or mentor.",
        ))
        .stdout(predicate::str::contains(
            "5. Focus Area: Your scores in Math need improvement. Prioritize these subjects this week.",
        ))
        .stdout(predicate::str::contains("6.").not());
}

#[test]
fn recommend_without_features_prints_fallback() {
    advisor()
        .args(["recommend", "--category", ""])
        .assert()
        .success()
        .stdout(
            "Generated Recommendations:\n1. Continue with your current study methodology as it appears to be working well.\n",
        );
}

#[test]
fn recommend_flags_override_features_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"study_hours": 1, "internet_access": 0}}"#).unwrap();

    advisor()
        .args(["recommend", "--category", "Grade 0", "--study-hours", "8", "--features"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Increase self-study time").not())
        .stdout(predicate::str::contains("Resource: Utilize the school library"));
}

#[test]
fn recommend_json_output() {
    advisor()
        .args(["recommend", "--category", "High", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""tier": "High""#))
        .stdout(predicate::str::contains(r#""kind": "priority""#));
}

#[test]
fn strict_mode_rejects_wrong_types() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"math_score": "forty"}}"#).unwrap();

    advisor()
        .args(["recommend", "--category", "Average", "--strict", "--features"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("math_score"));
}

#[test]
fn config_file_changes_thresholds() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[thresholds]\nmin_attendance_percentage = 95.0").unwrap();

    advisor()
        .arg("--config")
        .arg(file.path())
        .args(["recommend", "--category", "", "--attendance", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Low attendance detected."));
}

#[test]
fn config_command_prints_toml() {
    advisor()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"))
        .stdout(predicate::str::contains("weak_subject_score = 50.0"));
}
