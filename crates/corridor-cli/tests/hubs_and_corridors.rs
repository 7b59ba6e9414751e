use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn prepare_command() -> Command {
    let dataset = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../corridor-lib/data/northeast.json");
    let mut cmd = cargo_bin_cmd!("corridor");
    cmd.env("RUST_LOG", "error")
        .arg("--no-color")
        .arg("--data")
        .arg(dataset);
    cmd
}

#[test]
fn hubs_table_lists_status_for_every_hub() {
    prepare_command()
        .arg("hubs")
        .arg("--rainfall")
        .arg("45")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hub accessibility at 45mm rainfall:"))
        .stdout(predicate::str::contains("Tawang"))
        .stdout(predicate::str::is_match("(ACCESSIBLE|DEGRADED|CRITICAL)").unwrap());
}

#[test]
fn extreme_rain_makes_every_hub_critical() {
    let output = prepare_command()
        .arg("--format")
        .arg("json")
        .arg("hubs")
        .arg("--rainfall")
        .arg("250")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let rows = rows.as_array().expect("array of hubs");
    assert_eq!(rows.len(), 10);
    assert!(rows.iter().all(|row| row["status"] == "CRITICAL"));
}

#[test]
fn corridors_lists_presets() {
    prepare_command()
        .arg("corridors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Relief: Silchar → Aizawl"));
}

#[test]
fn running_preset_routes_relief_mission() {
    prepare_command()
        .arg("corridors")
        .arg("--run")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mission Silchar -> Aizawl"))
        .stdout(predicate::str::contains("MISSION"))
        .stdout(predicate::str::contains("via sc2 [restricted]"));
}

#[test]
fn running_unknown_preset_fails() {
    prepare_command()
        .arg("corridors")
        .arg("--run")
        .arg("9")
        .assert()
        .failure()
        .stderr(predicate::str::contains("emergency corridor 9 does not exist"));
}
