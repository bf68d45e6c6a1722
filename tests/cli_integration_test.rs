//! Integration tests for the grantlift binary.

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn grantlift(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("grantlift").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_project_json_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let output = grantlift(&temp_dir)
        .args(["project", "--plain", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("Output is not valid JSON");
    assert_eq!(json["metrics"]["total_projected_revenue"], 1_075_000.0);
    assert_eq!(json["metadata"]["formula_policy_version"], 1);
}

#[test]
fn test_project_reads_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".grantlift.toml"),
        indoc! {r#"
            [inputs]
            current_traffic = 2000
            period = "annual"

            [output]
            default_format = "json"
        "#},
    )
    .unwrap();

    let output = grantlift(&temp_dir).arg("project").output().unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["inputs"]["current_traffic"], 2000);
    assert_eq!(json["metrics"]["period"], "annual");
    assert_eq!(json["metrics"]["current_revenue"], 60_000.0);
}

#[test]
fn test_project_writes_markdown_file() {
    let temp_dir = TempDir::new().unwrap();
    let report = temp_dir.path().join("report.md");

    grantlift(&temp_dir)
        .args(["project", "-f", "markdown", "-o"])
        .arg(&report)
        .assert()
        .success();

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.contains("| 📍 Current Revenue | `$25,000.00` |"));
}

#[test]
fn test_invalid_input_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = grantlift(&temp_dir)
        .args(["project", "--lifetime-years", "25"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lifetime_years"), "stderr: {stderr}");
}

#[test]
fn test_infinite_amount_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = grantlift(&temp_dir)
        .args(["project", "--plain", "-f", "json", "--avg-donation", "inf"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("avg_donation"), "stderr: {stderr}");
}

#[test]
fn test_clamped_infinite_amount_projects_finite_figures() {
    let temp_dir = TempDir::new().unwrap();
    let output = grantlift(&temp_dir)
        .args(["project", "--clamp", "-f", "json", "--avg-donation", "inf"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["metrics"]["total_projected_revenue"].is_f64());
    assert!(json["metrics"]["total_growth_pct"].is_f64());
}

#[test]
fn test_clamp_accepts_invalid_input() {
    let temp_dir = TempDir::new().unwrap();
    grantlift(&temp_dir)
        .args(["project", "--plain", "--clamp", "--lifetime-years", "25"])
        .assert()
        .success();
}

#[test]
fn test_validate_command() {
    let temp_dir = TempDir::new().unwrap();
    grantlift(&temp_dir)
        .env("NO_COLOR", "1")
        .arg("validate")
        .assert()
        .success();

    grantlift(&temp_dir)
        .args(["validate", "--avg-cpc", "0", "--avg-donation", "0"])
        .assert()
        .failure();
}

#[test]
fn test_init_creates_config_once() {
    let temp_dir = TempDir::new().unwrap();

    grantlift(&temp_dir).arg("init").assert().success();
    assert!(temp_dir.path().join(".grantlift.toml").exists());

    grantlift(&temp_dir).arg("init").assert().failure();
    grantlift(&temp_dir).args(["init", "--force"]).assert().success();
}
