use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("energy-forecast").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("energy-forecast"));
}

#[test]
fn list_prints_countries_in_order() {
    let mut cmd = Command::cargo_bin("energy-forecast").unwrap();
    cmd.arg("list");
    cmd.assert()
        .success()
        .stdout("Romania\nPoland\nHungary\n");
}

#[test]
fn export_writes_named_csv() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("energy-forecast").unwrap();
    cmd.args(["export", "--country", "hungary", "--out-dir"])
        .arg(dir.path());
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Saved 11 rows"));

    let text = fs::read_to_string(dir.path().join("Hungary_forecast.csv")).unwrap();
    assert!(text.starts_with("Year,Value\n2015,22\n"));
    assert!(text.ends_with("\n2025,47.1"));
}

#[test]
fn unknown_country_fails_with_choices() {
    let mut cmd = Command::cargo_bin("energy-forecast").unwrap();
    cmd.args(["show", "--country", "Atlantis"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Romania, Poland, Hungary"));
}

#[test]
fn show_with_stats() {
    let mut cmd = Command::cargo_bin("energy-forecast").unwrap();
    cmd.args(["show", "--country", "Poland", "--stats"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("166.1"))
        .stdout(predicate::str::contains("count=11"));
}

#[test]
fn accuracy_table_lists_five_models() {
    let mut cmd = Command::cargo_bin("energy-forecast").unwrap();
    cmd.arg("accuracy");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Linear Regression"))
        .stdout(predicate::str::contains("Ensemble (Final)"))
        .stdout(predicate::str::contains("0.93"));
}

#[test]
fn model_lists_components() {
    let mut cmd = Command::cargo_bin("energy-forecast").unwrap();
    cmd.arg("model");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("XGBoost"))
        .stdout(predicate::str::contains("Artificial Neural Networks"));
}
