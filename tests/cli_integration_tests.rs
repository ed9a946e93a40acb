//! CLI Integration Tests
//!
//! Tests the binary directly using assert_cmd to exercise main.rs code paths.

// Binaries are stubbed during coverage builds
#![cfg(not(coverage))]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::TempDir;

fn write_workbook(path: &Path, rows: &[(&str, &str, f64)]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Customer").unwrap();
    worksheet.write_string(0, 1, "Date").unwrap();
    worksheet.write_string(0, 2, "Amount").unwrap();
    for (i, (customer, date, amount)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, *customer).unwrap();
        worksheet.write_string(row, 1, *date).unwrap();
        worksheet.write_number(row, 2, *amount).unwrap();
    }
    workbook.save(path).unwrap();
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("ledger-summary").unwrap();
    cmd.env_remove("LEDGER_CAPTION")
        .env_remove("LEDGER_GENERATED_ON")
        .env_remove("LEDGER_LOG");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ledger-summary"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ledger-summary"));
}

#[test]
fn test_summarize_help() {
    cmd()
        .args(["summarize", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--rows-out"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SUMMARIZE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_summarize_writes_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("movements.xlsx");
    let output = temp_dir.path().join("summary.xlsx");
    write_workbook(
        &input,
        &[
            ("A00001", "2023-12-05", 100.0),
            ("A00001", "2023-12-20", 50.0),
            ("A00002", "2023-12-01", 30.0),
        ],
    );

    cmd()
        .arg("summarize")
        .arg(&input)
        .arg(&output)
        .args(["--generated-on", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary Complete"))
        .stdout(predicate::str::contains("2 customer-month rows"));

    assert!(output.exists());
}

#[test]
fn test_summarize_verbose_lists_rows() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("movements.xlsx");
    let output = temp_dir.path().join("summary.xlsx");
    write_workbook(&input, &[("A00001", "2023-12-05", 12.5)]);

    cmd()
        .arg("summarize")
        .arg(&input)
        .arg(&output)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-12"))
        .stdout(predicate::str::contains("12.5"));
}

#[test]
fn test_summarize_rows_out_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("movements.xlsx");
    let output = temp_dir.path().join("summary.xlsx");
    let rows_out = temp_dir.path().join("rows.json");
    write_workbook(&input, &[("A00001", "2023-12-05", 100.0)]);

    cmd()
        .arg("summarize")
        .arg(&input)
        .arg(&output)
        .arg("--rows-out")
        .arg(&rows_out)
        .assert()
        .success();

    let content = std::fs::read_to_string(&rows_out).unwrap();
    assert!(content.contains("\"customer\": \"A00001\""));
    assert!(content.contains("\"year_month\": \"2023-12\""));
}

#[test]
fn test_summarize_rejects_unknown_rows_format_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("movements.xlsx");
    let output = temp_dir.path().join("summary.xlsx");
    write_workbook(&input, &[("A00001", "2023-12-05", 100.0)]);

    cmd()
        .arg("summarize")
        .arg(&input)
        .arg(&output)
        .args(["--rows-out", "rows.csv"])
        .assert()
        .failure();

    assert!(!output.exists());
}

#[test]
fn test_summarize_rows_out_in_missing_directory_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("movements.xlsx");
    let output = temp_dir.path().join("summary.xlsx");
    let rows_out = temp_dir.path().join("missing").join("rows.json");
    write_workbook(&input, &[("A00001", "2023-12-05", 100.0)]);

    cmd()
        .arg("summarize")
        .arg(&input)
        .arg(&output)
        .arg("--rows-out")
        .arg(&rows_out)
        .assert()
        .failure();

    assert!(!output.exists());
    assert!(!rows_out.exists());
}

#[test]
fn test_summarize_unwritable_output_leaves_no_rows_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("movements.xlsx");
    let output = temp_dir.path().join("missing").join("summary.xlsx");
    let rows_out = temp_dir.path().join("rows.yaml");
    write_workbook(&input, &[("A00001", "2023-12-05", 100.0)]);

    cmd()
        .arg("summarize")
        .arg(&input)
        .arg(&output)
        .arg("--rows-out")
        .arg(&rows_out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export"));

    assert!(!rows_out.exists());
}

#[test]
fn test_summarize_bad_date_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("movements.xlsx");
    let output = temp_dir.path().join("summary.xlsx");
    write_workbook(&input, &[("A00001", "someday", 100.0)]);

    cmd()
        .arg("summarize")
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("UnparseableDate"));

    assert!(!output.exists());
}

#[test]
fn test_summarize_orphan_amount_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("orphan.xlsx");
    let output = temp_dir.path().join("summary.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Customer").unwrap();
    worksheet.write_number(1, 2, 100.0).unwrap();
    workbook.save(&input).unwrap();

    cmd()
        .arg("summarize")
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("OrphanColumn"));

    assert!(!output.exists());
}

#[test]
fn test_summarize_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    cmd()
        .arg("summarize")
        .arg(temp_dir.path().join("nope.xlsx"))
        .arg(temp_dir.path().join("out.xlsx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import"));
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_inspect_lists_movements() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("movements.xlsx");
    write_workbook(
        &input,
        &[("A00001", "2023-12-05", 100.0), ("A00002", "2023-12-01", 30.0)],
    );

    cmd()
        .arg("inspect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("A00002"))
        .stdout(predicate::str::contains("2 movements"));
}
