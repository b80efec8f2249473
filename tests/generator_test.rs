use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tillsim::application::simulation::SAMPLE_COSTS;

mod common;

#[test]
fn test_generate_simple_csv() {
    let output_path = std::path::PathBuf::from("test_generated.csv");
    common::generate_purchases_csv(&output_path, &SAMPLE_COSTS).expect("Failed to generate CSV");

    let content = std::fs::read_to_string(&output_path).expect("Failed to read file");
    // Header + 8 rows
    assert_eq!(content.lines().count(), 9);

    std::fs::remove_file(output_path).ok();
}

#[test]
fn test_generated_csv_matches_sample_day() {
    let output_path = std::path::PathBuf::from("test_generated_sample.csv");
    common::generate_purchases_csv(&output_path, &SAMPLE_COSTS).expect("Failed to generate CSV");

    let mut cmd = Command::new(cargo_bin!("tillsim"));
    cmd.arg(&output_path);

    // Same till as `tillsim --sample`
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("20,17,340"))
        .stdout(predicate::str::contains("1,41,41"));

    std::fs::remove_file(output_path).ok();
}

#[test]
fn test_every_cost_in_range_is_handled() {
    let output_path = std::path::PathBuf::from("test_generated_range.csv");
    let costs: Vec<u32> = (2..=49).collect();
    common::generate_purchases_csv(&output_path, &costs).expect("Failed to generate CSV");

    let output = Command::new(cargo_bin!("tillsim"))
        .arg(&output_path)
        .args(["--format", "json"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["till"]["total_value"], report["expected_total"]);
    assert_eq!(
        report["settled"].as_u64().unwrap()
            + report["insufficient_payment"].as_u64().unwrap()
            + report["cannot_make_change"].as_u64().unwrap(),
        48
    );

    std::fs::remove_file(output_path).ok();
}
