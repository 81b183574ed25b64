//! CLI binary smoke tests using assert_cmd.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("phonoscreen").unwrap()
}

#[test]
fn default_run_prints_report() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Model Training Complete. Test Accuracy:"))
        .stdout(predicate::str::contains(
            "-> Diagnosis: High risk for Parkinson's disease based on vocal features.",
        ))
        .stdout(predicate::str::contains(
            "-> Diagnosis: Low risk for Parkinson's disease; vocal features appear typical.",
        ))
        .stdout(predicate::str::contains("NOTE: This model is trained on simulated data."));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--print-config"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("phonoscreen"));
}

#[test]
fn print_config_emits_json() {
    cmd()
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"test_fraction\": 0.25"))
        .stdout(predicate::str::contains("\"n_samples\": 200"));
}

#[test]
fn missing_config_file_fails() {
    cmd()
        .args(["--config", "/nonexistent/phonoscreen.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn odd_sample_count_aborts_with_stage() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "pipeline": {{ "generator": {{ "n_samples": 51 }} }} }}"#).unwrap();
    cmd()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("dataset generation"));
}

#[test]
fn custom_samples_are_screened() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "samples": [ {{ "name": "Patient A", "features": {{ "jitter": 0.0085, "shimmer": 0.065, "hnr": 15.5 }} }} ] }}"#
    )
    .unwrap();
    cmd()
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Patient A Features: Jitter=0.0085"))
        .stdout(predicate::str::contains("Sample 1").not());
}
