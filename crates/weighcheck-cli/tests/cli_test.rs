//! End-to-end tests for the weighcheck binary

use std::path::Path;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

/// Run the binary with config isolated under a temp home
fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_weighcheck"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run weighcheck")
}

fn run_json(home: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = run(home.path(), args);
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_classify_json_warning() {
    let home = tempdir().unwrap();
    let value = run_json(
        &home,
        &["classify", "--weight", "79000", "--axle-class", "gross", "-j", "TX", "--format", "json"],
    );
    assert_eq!(value["status"], "warning");
    assert_eq!(value["applicable_limit"], 80000);
    assert_eq!(value["jurisdiction"], "TX");
}

#[test]
fn test_classify_state_limit_wins() {
    let home = tempdir().unwrap();
    let value = run_json(
        &home,
        &[
            "classify", "-w", "90,000 lbs", "-a", "gross", "-j", "MI", "--state-limit", "164000", "-f", "json",
        ],
    );
    assert_eq!(value["status"], "compliant");
    assert_eq!(value["applicable_limit"], 164000);
    assert_eq!(value["limit_source"], "state_override");
}

#[test]
fn test_invalid_weight_fails() {
    let home = tempdir().unwrap();
    let output = run(home.path(), &["classify", "--weight", "-5", "--axle-class", "single"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));

    let output = run(home.path(), &["classify", "--weight", "heavy", "--axle-class", "single"]);
    assert!(!output.status.success());
}

#[test]
fn test_bridge_json() {
    let home = tempdir().unwrap();
    let value = run_json(&home, &["bridge", "--axles", "3", "--spacing", "30", "-f", "json"]);
    assert_eq!(value["max_weight_pounds"], 58500);

    let value = run_json(&home, &["bridge", "--axles", "1", "--spacing", "0", "-f", "json"]);
    assert!(value["max_weight_pounds"].is_null());
}

#[test]
fn test_bridge_zero_axles_fails() {
    let home = tempdir().unwrap();
    let output = run(home.path(), &["bridge", "--axles", "0", "--spacing", "10"]);
    assert!(!output.status.success());
}

#[test]
fn test_limits_unknown_code_is_federal() {
    let home = tempdir().unwrap();
    let value = run_json(&home, &["limits", "-j", "ZZ", "-f", "json"]);
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["jurisdiction"], "US");
    assert_eq!(rows[0]["gross_vehicle_weight"], 80000);
}

#[test]
fn test_limits_lists_every_jurisdiction() {
    let home = tempdir().unwrap();
    let value = run_json(&home, &["limits", "-f", "json"]);
    assert_eq!(value.as_array().unwrap().len(), 52);
}

#[test]
fn test_check_tickets_csv() {
    let home = tempdir().unwrap();
    let csv = home.path().join("tickets.csv");
    std::fs::write(
        &csv,
        "ticket_number,date,vehicle_id,jurisdiction,axle_class,weight_pounds,axle_count,spacing_feet\n\
         T-1,2024-06-01,TRK-1,TX,gross,81000,,\n\
         T-2,2024-06-01,TRK-2,TX,gross,79000,,\n\
         T-3,2024-06-02,TRK-3,CO,gross,70000,,\n\
         T-4,2024-06-02,TRK-4,US,tandem,30000,0,10\n\
         T-5,2024-06-03,TRK-5,US,tandem,-10,,\n",
    )
    .unwrap();

    let value = run_json(&home, &["check-tickets", csv.to_str().unwrap(), "-f", "json"]);
    let summary = &value["summary"];
    assert_eq!(summary["total"], 4);
    assert_eq!(summary["compliant"], 1);
    assert_eq!(summary["warning"], 1);
    assert_eq!(summary["non_compliant"], 1);
    assert_eq!(summary["rejected"], 1);
}

#[test]
fn test_check_tickets_filtered_by_vehicle_and_date() {
    let home = tempdir().unwrap();
    let csv = home.path().join("tickets.csv");
    std::fs::write(
        &csv,
        "ticket_number,date,vehicle_id,jurisdiction,axle_class,weight_pounds,axle_count,spacing_feet\n\
         T-1,2024-06-01,TRK-1,TX,gross,81000,,\n\
         T-2,2024-06-02,TRK-1,TX,gross,79000,,\n\
         T-3,2024-06-02,TRK-2,CO,gross,70000,,\n",
    )
    .unwrap();
    let path = csv.to_str().unwrap();

    let value = run_json(&home, &["check-tickets", path, "--vehicle", "trk-1", "-f", "json"]);
    assert_eq!(value["summary"]["total"], 2);

    let value = run_json(
        &home,
        &["check-tickets", path, "--vehicle", "TRK-1", "--date", "2024-06-02", "-f", "json"],
    );
    assert_eq!(value["summary"]["total"], 1);
    assert_eq!(value["results"][0]["ticket"]["ticket_number"], "T-2");

    let output = run(home.path(), &["check-tickets", path, "--date", "June 2"]);
    assert!(!output.status.success());
}

#[test]
fn test_check_tickets_missing_path_fails() {
    let home = tempdir().unwrap();
    let output = run(home.path(), &["check-tickets", "/nonexistent/tickets.csv"]);
    assert!(!output.status.success());
}

#[test]
fn test_config_default_jurisdiction_used() {
    let home = tempdir().unwrap();
    let output = run(home.path(), &["config", "--set-jurisdiction", "co"]);
    assert!(output.status.success());

    let value = run_json(&home, &["classify", "-w", "84000", "-a", "gross", "-f", "json"]);
    assert_eq!(value["jurisdiction"], "CO");
    assert_eq!(value["applicable_limit"], 85000);
}
