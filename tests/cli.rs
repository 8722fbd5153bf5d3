//! End-to-end runs of the interest_compare binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const SCENARIOS: &str = "\
# compared accounts
-r 0.02:Y -d 100 -t 1:Y -n low
-r abc:Y -d 100 -t 1:Y
-r 0.05:Y -d 100 -t 1:Y -n high
";

fn bin() -> Command {
    Command::cargo_bin("interest_compare").unwrap()
}

fn write_scenarios(dir: &Path) -> String {
    let path = dir.join("scenarios.txt");
    fs::write(&path, SCENARIOS).unwrap();
    path.to_string_lossy().into_owned()
}

fn rows(path: &Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| line.split('|').map(str::to_string).collect())
        .collect()
}

#[test]
fn test_missing_required_flags_abort_run() {
    bin()
        .args(["-r", "0.02:Y", "-t", "1:Y"])
        .write_stdin("-r 0.05:Y -d 100 -t 1:Y\ns\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing argument"))
        .stdout(predicate::str::contains("0.05").not());
}

#[test]
fn test_stdin_lines_then_command_line() {
    let output = bin()
        .args(["-r", "0.02:Y", "-d", "100", "-t", "1:Y", "-n", "from_args"])
        .write_stdin("-r 0.05:Y -d 100 -t 1:Y -n typed\ns\n-r 0.09:Y -d 1 -t 1:Y -n ignored\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let table = String::from_utf8(output).unwrap();
    let typed = table.find("typed").unwrap();
    let from_args = table.find("from_args").unwrap();
    assert!(typed < from_args);
    assert!(!table.contains("ignored"));
    assert!(table.contains("Net Investment"));
}

#[test]
fn test_input_files_sorted_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenarios(dir.path());
    let output = dir.path().join("results.txt");

    bin()
        .args(["-i", &input, "-s", "R", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let rows = rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "0");
    assert_eq!(rows[0][1], "high");
    assert_eq!(rows[1][1], "low");
    assert_eq!(rows[0][5].parse::<f64>().unwrap(), 100.0);
}

#[test]
fn test_graph_prints_chart_series() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenarios(dir.path());
    let output = dir.path().join("results.txt");

    let stdout = bin()
        .args(["-i", &input, "-g", "M", "-o"])
        .arg(&output)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let series: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    let series = series.as_array().unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0]["label"], "Results: 0");

    let points = series[0]["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    let x = points[1][0].as_f64().unwrap();
    assert!((x - 365.0 / 30.0).abs() < 1e-9);
}

#[test]
fn test_invalid_sort_key_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_scenarios(dir.path());

    bin().args(["-i", &input, "-s", "X"]).assert().failure();
}

#[test]
fn test_unreadable_input_file_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    bin()
        .arg("-i")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a readable file"));
}

#[test]
fn test_separator_override_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nested.txt");
    fs::write(&input, "-r 0.04:Y:S -d 1000/0.02:Y:T/100 -t 1:Y -n swept\n").unwrap();
    let output = dir.path().join("results.txt");

    bin()
        .env_remove("INTEREST_COMPARE_NESTED_SEPARATOR")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();
    assert!(rows(&output).is_empty());

    bin()
        .env("INTEREST_COMPARE_NESTED_SEPARATOR", "/")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();
    let rows = rows(&output);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], "swept");
    // Initial 1000 plus one sweep of [100, 0] trimester deposits
    assert_eq!(rows[0][5].parse::<f64>().unwrap(), 1100.0);
}
