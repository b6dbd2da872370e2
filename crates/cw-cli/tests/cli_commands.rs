//! CLI integration tests for the `cw` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cw() -> Command {
    Command::cargo_bin("cw").unwrap()
}

// ---------------------------------------------------------------------------
// odds
// ---------------------------------------------------------------------------

#[test]
fn odds_for_fresh_chamber() {
    cw().args(["odds", "-l", "1", "-b", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1 lethal (50.0%)")
                .and(predicate::str::contains("1 harmless (50.0%)"))
                .and(predicate::str::contains("Slot")),
        );
}

#[test]
fn odds_after_script_shows_exclusion() {
    cw().args([
        "odds",
        "-l",
        "2",
        "-b",
        "2",
        "--script",
        "fire harmless; fire harmless",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("0 harmless (0%)")
            .and(predicate::str::contains("lethal 100.0% | harmless 0% (certain)")),
    );
}

#[test]
fn odds_json_output() {
    let output = cw()
        .args(["odds", "-l", "1", "-b", "3", "--json", "--script", "peek lethal"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["aggregate"]["status"], "remaining");
    assert_eq!(json["next"]["estimate"]["basis"], "disclosed");
    assert_eq!(json["positions"].as_array().unwrap().len(), 4);
}

#[test]
fn odds_rejects_type_mismatch() {
    cw().args([
        "odds",
        "-l",
        "1",
        "-b",
        "1",
        "--script",
        "peek lethal; fire harmless",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot fire it as harmless"));
}

#[test]
fn odds_rejects_invalid_configuration() {
    cw().args(["odds", "-l", "6", "-b", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 10 rounds"));

    cw().args(["odds", "-l", "0", "-b", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn odds_when_exhausted() {
    cw().args([
        "odds",
        "-l",
        "1",
        "-b",
        "1",
        "--script",
        "fire lethal; fire harmless",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("All rounds have been fired"));
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_markdown_to_stdout() {
    cw().args(["export", "-l", "1", "-b", "2", "--script", "scan 3 harmless; fire lethal"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# Chamber Journal")
                .and(predicate::str::contains("**Scan** slot 3: harmless"))
                .and(predicate::str::contains("**Fired** slot 1: lethal")),
        );
}

#[test]
fn export_json_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.json");
    cw().args(["export", "--dealer", "--seed", "5", "--script", "fire; fire"])
        .args(["-f", "json", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported journal"));

    let content = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["entries"].as_array().unwrap().len(), 3);
}

#[test]
fn export_rejects_unknown_format() {
    cw().args(["export", "-f", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_reads_commands_from_stdin() {
    cw().args(["play", "-l", "1", "-b", "1"])
        .write_stdin("peek harmless\nfire harmless\nchamber\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Slot 1 is harmless.")
                .and(predicate::str::contains("Slot 1 fired: harmless"))
                .and(predicate::str::contains("Next: lethal (certain)"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_reports_rule_violations_and_continues() {
    cw().args(["play", "-l", "1", "-b", "2"])
        .write_stdin("fire lethal\nfire lethal\nodds\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("no lethal rounds left")
                .and(predicate::str::contains("harmless (certain)")),
        );
}

#[test]
fn play_with_dealer() {
    cw().args(["play", "--dealer", "--seed", "7", "-l", "1", "-b", "1"])
        .write_stdin("fire\nfire\nfire\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Dealer seed: 7")
                .and(predicate::str::contains("The chamber is empty.")),
        );
}

#[test]
fn version_flag() {
    cw().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cw"));
}
