//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "runeherald-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn check_water_warning_tick() {
    let (stdout, _, code) = run_cli(&["check", "--at", "106"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["elapsed_secs"], 106);
    assert_eq!(parsed["clock"], "01:46");
    assert_eq!(parsed["due"][0], "water");
}

#[test]
fn check_match_start_fires_day() {
    let (stdout, _, code) = run_cli(&["check", "--at", "0"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["due"][0], "day");
}

#[test]
fn check_quiet_tick_has_empty_due() {
    let (stdout, _, code) = run_cli(&["check", "--at", "107"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed["due"].as_array().unwrap().is_empty());
}

#[test]
fn check_range_lists_only_firing_ticks() {
    let (stdout, _, code) = run_cli(&["check", "--from", "100", "--to", "240"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let firings = parsed.as_array().unwrap();
    assert_eq!(firings[0]["elapsed_secs"], 106);
    assert_eq!(firings[0]["due"][0], "water");
    // 226 is the second water warning; 232 the first bounty one.
    assert!(firings.iter().any(|f| f["elapsed_secs"] == 226));
    assert!(firings.iter().any(|f| f["elapsed_secs"] == 232));
}

#[test]
fn schedule_water_is_finite() {
    let (stdout, _, code) = run_cli(&["schedule", "--json", "--category", "water"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["at_secs"], 120);
    assert_eq!(rows[1]["at_secs"], 240);
    assert_eq!(rows[0]["warn_secs"], 106);
}

#[test]
fn schedule_rejects_unknown_category() {
    let (_, stderr, code) = run_cli(&["schedule", "--category", "aegis"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown category"));
}
