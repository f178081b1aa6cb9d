use assert_cmd::Command;
use indoc::formatdoc;
use predicates::prelude::*;
use std::fs;

use plutus_fixtures_test_helpers::fixtures;

fn fixtures_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("plutus-fixtures"))
}

// ============================================================================
// CATALOG LISTING
// ============================================================================

#[test]
fn test_list_prints_catalog() {
    fixtures_cmd()
        .arg("--list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("AlwaysSucceeds")
                .and(predicate::str::contains("AlwaysSucceedsV2"))
                .and(predicate::str::contains("OneShotMintingV2"))
                .and(predicate::str::contains("Scripts/always-succeeds.plutus")),
        );
}

// ============================================================================
// SCRIPT PRINTING
// ============================================================================

#[test]
fn test_print_script_from_fixtures_dir() {
    let tree = fixtures::script_tree();

    fixtures_cmd()
        .arg("--fixtures-dir")
        .arg(tree.path())
        .arg("AlwaysSucceeds")
        .assert()
        .success()
        .stdout(predicate::eq(fixtures::always_succeeds_text()));
}

#[test]
fn test_print_script_from_bundle() {
    fixtures_cmd()
        .arg("--bundled")
        .arg("AlwaysSucceedsV2")
        .assert()
        .success()
        .stdout(predicate::str::contains("PlutusScriptV2"));
}

#[test]
fn test_unknown_script_name_fails() {
    fixtures_cmd()
        .arg("--bundled")
        .arg("NoSuchScript")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown script"));
}

#[test]
fn test_missing_fixture_file_fails() {
    let empty = tempfile::TempDir::new().unwrap();

    fixtures_cmd()
        .arg("--fixtures-dir")
        .arg(empty.path())
        .arg("AlwaysSucceeds")
        .assert()
        .failure()
        .stderr(predicate::str::contains("script not found"));
}

#[test]
fn test_no_names_errors() {
    fixtures_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No script names specified"));
}

// ============================================================================
// CONFIGURATION FILE
// ============================================================================

#[test]
fn test_project_config_selects_fixtures_dir() {
    let tree = fixtures::script_tree();
    let config_dir = tempfile::TempDir::new().unwrap();
    let config_path = config_dir.path().join("fixtures.yaml");
    let config = formatdoc! {r#"
        source: filesystem
        fixturesDir: "{}"
    "#, tree.path().display()};
    fs::write(&config_path, config).unwrap();

    fixtures_cmd()
        .arg("--project")
        .arg(&config_path)
        .arg("OneShotMintingV2")
        .assert()
        .success()
        .stdout(predicate::eq(fixtures::one_shot_minting_v2_text()));
}

// ============================================================================
// CROSS-SOURCE PARITY CHECK
// ============================================================================

#[test]
fn test_check_reports_in_sync() {
    let tree = fixtures::script_tree();

    fixtures_cmd()
        .arg("--fixtures-dir")
        .arg(tree.path())
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("in sync"));
}

#[test]
fn test_check_detects_drift() {
    let tree = fixtures::script_tree();
    fs::write(
        tree.path().join("scripts/always-succeeds-v2.plutus"),
        "deadbeef\n",
    )
    .unwrap();

    fixtures_cmd()
        .arg("--fixtures-dir")
        .arg(tree.path())
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of sync"));
}
