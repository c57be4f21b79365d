//! Integration tests for the `topsis-rank` binary.
//!
//! These tests run the compiled binary against files in a temporary
//! directory and check exit status, stdout/stderr and the written table.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

// =============================================================================
// Test Infrastructure
// =============================================================================

const PHONES: &str = "\
Model,Price,Storage,Camera
A,250,16,12
B,200,16,8
C,300,32,16
";

/// One clear winner followed by three identical alternatives.
const THREE_WAY_TIE: &str = "\
Name,X,Y,Z
W,3,3,3
P,1,1,1
Q,1,1,1
R,1,1,1
";

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("data.csv");
    std::fs::write(&path, content).unwrap();
    path
}

/// Runs the binary inside `dir` with a clean environment plus `envs`.
fn run_in(dir: &TempDir, args: &[&str], envs: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_topsis-rank"))
        .args(args)
        .current_dir(dir.path())
        .env_clear()
        .envs(envs.iter().copied())
        .output()
        .unwrap()
}

fn run(dir: &TempDir, args: &[&str]) -> Output {
    run_in(dir, args, &[])
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn column(path: &Path, name: &str) -> Vec<String> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let index = reader
        .headers()
        .unwrap()
        .iter()
        .position(|h| h == name)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap()[index].to_string())
        .collect()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

// =============================================================================
// Arguments
// =============================================================================

#[test]
fn ranks_and_reports_output_path() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, PHONES);
    let output = temp.path().join("result.csv");

    let result = run(&temp, &[path_str(&input), "1,1,1", "+,+,-", path_str(&output)]);

    assert_eq!(result.status.code(), Some(0), "stderr: {}", stderr(&result));
    assert_eq!(
        stdout(&result).trim(),
        format!("Results saved to {}", output.display())
    );
    assert_eq!(column(&output, "Rank"), vec!["3", "2", "1"]);
}

#[test]
fn impacts_may_start_with_a_hyphen() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, PHONES);
    let output = temp.path().join("result.csv");

    let result = run(&temp, &[path_str(&input), "1,1,1", "-,+,+", path_str(&output)]);

    assert_eq!(result.status.code(), Some(0), "stderr: {}", stderr(&result));
    assert!(stdout(&result).starts_with("Results saved to"));
    assert!(output.exists());
}

#[test]
fn missing_positional_is_usage_error() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, PHONES);

    let result = run(&temp, &[path_str(&input), "1,1,1"]);

    assert_eq!(result.status.code(), Some(2));
    assert!(stderr(&result).contains("Usage"));
    assert!(stdout(&result).is_empty());
}

#[test]
fn extra_positional_is_usage_error() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, PHONES);
    let output = temp.path().join("result.csv");

    let result = run(
        &temp,
        &[path_str(&input), "1,1,1", "+,+,-", path_str(&output), "extra"],
    );

    assert_eq!(result.status.code(), Some(2));
    assert!(!output.exists());
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn criteria_count_mismatch_exits_with_failure() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, PHONES);
    let output = temp.path().join("result.csv");

    let result = run(&temp, &[path_str(&input), "1,1", "+,+", path_str(&output)]);

    assert_eq!(result.status.code(), Some(1));
    let err = stderr(&result);
    assert!(err.starts_with("Error: Invalid shape"), "stderr: {}", err);
    assert_eq!(err.lines().count(), 1, "stderr: {}", err);
    assert!(!output.exists());
}

#[test]
fn missing_input_exits_with_failure() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("result.csv");

    let result = run(&temp, &["absent.csv", "1,1,1", "+,+,-", path_str(&output)]);

    assert_eq!(result.status.code(), Some(1));
    assert!(stderr(&result).starts_with("Error: "));
    assert!(!output.exists());
}

// =============================================================================
// Flags and configuration
// =============================================================================

#[test]
fn json_flag_prints_summary_instead_of_confirmation() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, PHONES);
    let output = temp.path().join("result.csv");

    let result = run(
        &temp,
        &[path_str(&input), "1,1,1", "+,+,-", path_str(&output), "--json"],
    );

    assert_eq!(result.status.code(), Some(0), "stderr: {}", stderr(&result));
    let text = stdout(&result);
    assert!(!text.contains("Results saved to"));

    let summary: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(summary["ranking_method"], "competition");
    let alternatives = summary["alternatives"].as_array().unwrap();
    assert_eq!(alternatives.len(), 3);
    assert_eq!(alternatives[2]["label"], "C");
    assert_eq!(alternatives[2]["rank"], 1);
    assert!(output.exists());
}

#[test]
fn precision_flag_overrides_environment() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, PHONES);
    let output = temp.path().join("result.csv");

    let result = run_in(
        &temp,
        &[
            path_str(&input),
            "1,1,1",
            "+,+,-",
            path_str(&output),
            "--precision",
            "6",
        ],
        &[("TOPSIS__SCORING__SCORE_PRECISION", "2")],
    );

    assert_eq!(result.status.code(), Some(0), "stderr: {}", stderr(&result));
    assert_eq!(
        column(&output, "Topsis Score"),
        vec!["0.320111", "0.442683", "0.557317"]
    );
}

#[test]
fn environment_precision_applies_without_flag() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, PHONES);
    let output = temp.path().join("result.csv");

    let result = run_in(
        &temp,
        &[path_str(&input), "1,1,1", "+,+,-", path_str(&output)],
        &[("TOPSIS__SCORING__SCORE_PRECISION", "2")],
    );

    assert_eq!(result.status.code(), Some(0), "stderr: {}", stderr(&result));
    assert_eq!(column(&output, "Topsis Score"), vec!["0.32", "0.44", "0.56"]);
}

#[test]
fn ranking_method_flag_overrides_environment() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, THREE_WAY_TIE);
    let competition = temp.path().join("competition.csv");
    let average = temp.path().join("average.csv");

    let first = run_in(
        &temp,
        &[
            path_str(&input),
            "1,1,1",
            "+,+,+",
            path_str(&competition),
            "--ranking-method",
            "competition",
        ],
        &[("TOPSIS__SCORING__RANKING_METHOD", "average")],
    );
    let second = run(
        &temp,
        &[
            path_str(&input),
            "1,1,1",
            "+,+,+",
            path_str(&average),
            "--ranking-method",
            "average",
        ],
    );

    assert_eq!(first.status.code(), Some(0), "stderr: {}", stderr(&first));
    assert_eq!(second.status.code(), Some(0), "stderr: {}", stderr(&second));
    assert_eq!(column(&competition, "Rank"), vec!["1", "2", "2", "2"]);
    // Ordinal positions 2, 3 and 4 average to 3.
    assert_eq!(column(&average, "Rank"), vec!["1", "3", "3", "3"]);
}

#[test]
fn unknown_ranking_method_is_usage_error() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, PHONES);
    let output = temp.path().join("result.csv");

    let result = run(
        &temp,
        &[
            path_str(&input),
            "1,1,1",
            "+,+,-",
            path_str(&output),
            "--ranking-method",
            "dense",
        ],
    );

    assert_eq!(result.status.code(), Some(2));
    assert!(!output.exists());
}
