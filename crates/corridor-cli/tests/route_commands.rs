use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../corridor-lib/data/northeast.json")
        .canonicalize()
        .expect("bundled dataset present")
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("corridor");
    cmd.env_remove("CORRIDOR_DATASET")
        .env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .arg("--data")
        .arg(dataset_path());
    cmd
}

#[test]
fn route_prints_both_modes() {
    let mut cmd = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("Guwahati")
        .arg("--to")
        .arg("Shillong");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Mission Guwahati -> Shillong"))
        .stdout(predicate::str::contains(" ACTIVE  Safest route: 98 km, 1 hops"))
        .stdout(predicate::str::contains(" ALT  Shortcut route"))
        .stdout(predicate::str::contains("\x1b").not());
}

#[test]
fn emergency_shortcut_uses_restricted_corridor() {
    let mut cmd = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("Guwahati")
        .arg("--to")
        .arg("Tawang")
        .arg("--emergency")
        .arg("--focus")
        .arg("shortcut");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("emergency ON"))
        .stdout(predicate::str::contains("via sc1 [restricted]"));
}

#[test]
fn normal_mode_routes_via_itanagar() {
    let mut cmd = prepare_command();
    cmd.arg("--format")
        .arg("note")
        .arg("route")
        .arg("--from")
        .arg("Guwahati")
        .arg("--to")
        .arg("Tawang");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SAFEST:"))
        .stdout(predicate::str::contains("Guwahati\nItanagar\nTawang\n"));
}

#[test]
fn json_format_is_machine_readable() {
    let mut cmd = prepare_command();
    cmd.arg("--format")
        .arg("json")
        .arg("route")
        .arg("--from")
        .arg("Kohima")
        .arg("--to")
        .arg("Kohima");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(value["safest"]["hops"], 0);
    assert_eq!(value["safest"]["avgSafetyScore"], 1.0);
    assert_eq!(value["weather"]["alertLevel"], "YELLOW");
}

#[test]
fn heavy_rain_raises_weather_alert() {
    let mut cmd = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("Silchar")
        .arg("--to")
        .arg("Agartala")
        .arg("--rainfall")
        .arg("200");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("CRITICAL"))
        .stdout(predicate::str::contains("WEATHER"))
        .stdout(predicate::str::contains("Extreme precipitation detected (200mm)"));
}

#[test]
fn explain_flag_adds_briefing() {
    let mut cmd = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("Guwahati")
        .arg("--to")
        .arg("Shillong")
        .arg("--explain");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("The safest route covers 98 km"));
}

#[test]
fn unknown_hub_error_is_friendly() {
    let mut cmd = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("Guwahati")
        .arg("--to")
        .arg("Guwahti");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown hub name: Guwahti"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn unknown_focus_is_rejected_by_parser() {
    let mut cmd = prepare_command();
    cmd.arg("route")
        .arg("--from")
        .arg("Guwahati")
        .arg("--to")
        .arg("Shillong")
        .arg("--focus")
        .arg("fastest");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown route mode fastest"));
}
