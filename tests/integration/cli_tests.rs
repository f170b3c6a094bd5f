//! CLI integration tests
//!
//! These tests run the excise binary inside a scratch project directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SUCCESS: &str = "Successfully deleted Favorites Gallery section.";
const NOT_FOUND: &str = "Could not find start or end markers.";

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Scratch project with the page fixture at app/page.tsx
fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("app")).unwrap();
    std::fs::copy(
        fixtures_path().join("page.tsx"),
        dir.path().join("app/page.tsx"),
    )
    .unwrap();
    dir
}

fn excise(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("excise").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

fn page(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("app/page.tsx")).unwrap()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    Command::cargo_bin("excise")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--undo-script"));
}

#[test]
fn test_cli_version() {
    Command::cargo_bin("excise")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("excise"));
}

// ============================================================================
// Excision
// ============================================================================

#[test]
fn test_default_target() {
    let dir = project();

    excise(dir.path())
        .assert()
        .success()
        .stdout(format!("{}\n", SUCCESS));

    assert!(!page(dir.path()).contains("Favorites Gallery"));
}

#[test]
fn test_explicit_path() {
    let dir = project();
    let other = dir.path().join("other.tsx");
    std::fs::copy(fixtures_path().join("page.tsx"), &other).unwrap();

    excise(dir.path())
        .arg("other.tsx")
        .assert()
        .success()
        .stdout(predicate::str::contains(SUCCESS));

    assert!(!std::fs::read_to_string(&other).unwrap().contains("Favorites Gallery"));
    assert!(page(dir.path()).contains("Favorites Gallery"));
}

#[test]
fn test_second_run_reports_failure_and_exits_zero() {
    let dir = project();

    excise(dir.path()).assert().success();
    let after_first = page(dir.path());

    excise(dir.path())
        .assert()
        .success()
        .stdout(format!("{}\n", NOT_FOUND));

    assert_eq!(page(dir.path()), after_first);
}

#[test]
fn test_missing_end_marker_leaves_file() {
    let dir = tempfile::tempdir().unwrap();
    let contents = "A\n{/* Favorites Gallery */}\nB\n";
    std::fs::write(dir.path().join("page.tsx"), contents).unwrap();

    excise(dir.path())
        .arg("page.tsx")
        .assert()
        .success()
        .stdout(predicate::str::contains(NOT_FOUND));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("page.tsx")).unwrap(),
        contents
    );
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    excise(dir.path())
        .arg("nope.tsx")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.tsx"));
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_dry_run() {
    let dir = project();
    let original = page(dir.path());

    excise(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("- ").and(predicate::str::contains("FavoriteCard")))
        .stdout(predicate::str::contains("Dry run - would delete"));

    assert_eq!(page(dir.path()), original);
}

#[test]
fn test_undo_script_written() {
    let dir = project();
    let original = page(dir.path());

    excise(dir.path())
        .args(["--undo-script", "undo.sh"])
        .assert()
        .success();

    let script = std::fs::read_to_string(dir.path().join("undo.sh")).unwrap();
    assert!(script.contains(&original));
}

#[test]
fn test_undo_script_skipped_when_not_found() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("page.tsx"), "nothing here\n").unwrap();

    excise(dir.path())
        .args(["page.tsx", "--undo-script", "undo.sh"])
        .assert()
        .success();

    assert!(!dir.path().join("undo.sh").exists());
}

#[test]
fn test_unwritable_undo_script_leaves_page() {
    let dir = project();
    let original = page(dir.path());

    excise(dir.path())
        .args(["--undo-script", "missing_dir/undo.sh"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("undo script"));

    assert_eq!(page(dir.path()), original);
    assert!(!dir.path().join("missing_dir/undo.sh").exists());
}

#[test]
fn test_output_with_terminal_format_warns() {
    let dir = project();

    excise(dir.path())
        .args(["--output", "report.json", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run - would delete"))
        .stderr(predicate::str::contains("--output only applies to the json format"));

    assert!(!dir.path().join("report.json").exists());
}

#[test]
fn test_json_format() {
    let dir = project();

    excise(dir.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"excised\""))
        .stdout(predicate::str::contains("\"start_line\": 5"))
        .stdout(predicate::str::contains("\"end_line\": 12"))
        .stdout(predicate::str::contains("\"removed_lines\": 7"));
}

#[test]
fn test_json_output_file() {
    let dir = project();

    excise(dir.path())
        .args(["--format", "json", "--output", "report.json", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let report = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
    assert!(report.contains("\"status\": \"would_excise\""));
}

#[test]
fn test_config_file_in_project() {
    let dir = project();
    std::fs::write(dir.path().join(".excise.yml"), "dry_run: true\n").unwrap();
    let original = page(dir.path());

    excise(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run - would delete"));

    assert_eq!(page(dir.path()), original);
}

#[test]
fn test_bad_config_fails() {
    let dir = project();
    std::fs::write(dir.path().join("broken.toml"), "dry_run = [").unwrap();

    excise(dir.path())
        .args(["--config", "broken.toml"])
        .assert()
        .failure();
}
