//! End-to-end folder and file validation against fixture directories
use std::fs;
use std::path::Path;

use tempfile::tempdir;
use tubingen_check::{
    validate_folder, validate_lines, validate_single_file, HumanReporter, LineStatus, RunOutcome,
};

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write fixture");
}

fn run(dir: &Path) -> (RunOutcome, String) {
    let mut reporter = HumanReporter::new(Vec::new());
    let outcome = validate_folder(dir, &mut reporter).expect("run folder validation");
    let out = String::from_utf8(reporter.into_inner()).expect("utf-8 report");
    (outcome, out)
}

#[test]
fn test_scenario_a_all_valid() {
    let report = validate_lines("a.txt", ["-10.1 26.4", "6.4", " 6.8"]);
    assert_eq!(report.error_count, 0);
    assert!(report.results.iter().all(|r| r.status == LineStatus::Valid));
}

#[test]
fn test_scenario_b_blank_line_is_error() {
    let report = validate_lines("b.txt", ["", "6.4"]);
    assert_eq!(report.results[0].status, LineStatus::Empty);
    assert_eq!(report.results[1].status, LineStatus::Valid);
    assert_eq!(report.error_count, 1);
}

#[test]
fn test_scenario_c_malformed_lines() {
    let report = validate_lines("c.txt", ["abc", "6.4 7.8 9.0"]);
    assert!(report.results.iter().all(|r| r.status == LineStatus::Malformed));
    assert_eq!(report.error_count, 2);
}

#[test]
fn test_scenario_d_no_txt_files() {
    let dir = tempdir().unwrap();
    write(dir.path(), "notes.csv", "1,2\n");

    let (outcome, out) = run(dir.path());
    assert!(outcome.summary().is_none());
    assert_eq!(out, format!("No .txt files found in {}\n", dir.path().display()));
    assert!(!out.contains("Validation complete!"));
}

#[test]
fn test_scenario_e_trailing_space() {
    let report = validate_lines("d.txt", ["6.4 "]);
    assert_eq!(report.error_count, 0);
}

#[test]
fn test_scenario_f_unreadable_file_does_not_stop_run() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.txt", "-10.1 26.4\n6.4\n 6.8\n");
    fs::write(dir.path().join("b.txt"), b"1 2\n\xc3\x28\n").unwrap();
    write(dir.path(), "c.txt", "abc\n6.4 7.8 9.0\n");

    let (outcome, out) = run(dir.path());
    let RunOutcome::Checked { reports, summary, .. } = outcome else {
        panic!("expected files to be checked");
    };

    assert_eq!(summary.files_checked, 3);
    assert_eq!(summary.files_with_errors, 2);
    assert_eq!(summary.total_errors, 3);

    assert!(reports[0].is_valid());
    assert_eq!(reports[0].results.len(), 3);
    assert!(reports[1].access_error.is_some());
    assert_eq!(reports[1].error_count, 1);
    assert_eq!(reports[2].results.len(), 2);

    assert!(out.contains("ERROR: Could not read b.txt: invalid UTF-8 after byte 4\n"));
    assert!(out.contains("ERROR: c.txt - Line 1: Invalid format: 'abc'\n"));
    assert!(out.contains("ERROR: c.txt - Line 2: Invalid format: '6.4 7.8 9.0'\n"));
}

#[test]
fn test_full_console_report() {
    let dir = tempdir().unwrap();
    write(dir.path(), "b.txt", "\n6.4\n");
    write(dir.path(), "a.txt", "-10.1 26.4\r\n6.4\r\n");

    let (_, out) = run(dir.path());
    let sep = "=".repeat(50);
    let expected = format!(
        "Checking 2 text files in {folder}\n\
         {sep}\n\
         ERROR: b.txt - Line 1: Empty line\n\
         {sep}\n\
         Validation complete!\n\
         Files checked: 2\n\
         Files with errors: 1\n\
         Total errors found: 1\n\
         [ERROR] Formatting issues found - see details above\n",
        folder = dir.path().display(),
    );
    assert_eq!(out, expected);
}

#[test]
fn test_rerun_is_idempotent() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.txt", "1 2\n\nx\n");
    write(dir.path(), "b.txt", "3\n");

    let (first, first_out) = run(dir.path());
    let (second, second_out) = run(dir.path());
    assert_eq!(first.summary(), second.summary());
    assert_eq!(first_out, second_out);
}

#[test]
fn test_single_file_entry_point() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("b.txt");
    fs::write(&path, "\n6.4\n").unwrap();

    let mut reporter = HumanReporter::new(Vec::new());
    let errors = validate_single_file(&path, &mut reporter).unwrap();
    assert_eq!(errors, 1);

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(
        out,
        "ERROR: b.txt - Line 1: Empty line\n[ERROR] b.txt has 1 formatting issues\n"
    );
}

#[test]
fn test_carriage_return_line_endings() {
    let dir = tempdir().unwrap();
    write(dir.path(), "mac.txt", "1 2\r3 4\r");
    write(dir.path(), "mixed.txt", "abc\rdef\n6.4\r\n");

    let (outcome, out) = run(dir.path());
    let RunOutcome::Checked { reports, summary, .. } = outcome else {
        panic!("expected files to be checked");
    };

    assert_eq!(reports[0].results.len(), 2);
    assert!(reports[0].is_valid());
    assert_eq!(reports[1].results.len(), 3);
    assert_eq!(summary.total_errors, 2);
    assert!(out.contains("ERROR: mixed.txt - Line 1: Invalid format: 'abc'\n"));
    assert!(out.contains("ERROR: mixed.txt - Line 2: Invalid format: 'def'\n"));
}
