use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".xrpl-pulse").join("config.json")
}

const BINARY_NAME: &str = "xrpl-pulse";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Terminal dashboard"))
        .stdout(contains("snapshot"));
}

#[test]
/// An offline snapshot prints every panel's fallback payload and still exits 0.
fn offline_snapshot_shows_fallback_data() {
    let tmp = temp_home_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["snapshot", "--offline"])
        .env("HOME", tmp.path())
        .env_remove("PULSE_ENVIRONMENT")
        .assert()
        .success()
        .stdout(contains("XRP QUOTE [fallback]"))
        .stdout(contains("3.15"))
        .stdout(contains("PREDICTION MARKETS [fallback]"));
}

#[test]
/// The first run writes a default config file for the user to edit.
fn first_run_creates_default_config() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["snapshot", "--offline", "--json"])
        .env("HOME", tmp.path())
        .env_remove("PULSE_ENVIRONMENT")
        .assert()
        .success();

    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(config["environment"], "mainnet");
    assert_eq!(config["poll_interval_secs"], 60);
}

#[test]
/// The JSON snapshot is a single parseable document.
fn offline_json_snapshot_is_valid_json() {
    let tmp = temp_home_dir();
    let output = Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["snapshot", "--offline", "--json"])
        .env("HOME", tmp.path())
        .env("PULSE_ENVIRONMENT", "testnet")
        .output()
        .unwrap();

    assert!(output.status.success());
    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["environment"], "testnet");
    assert!(
        document["endpoints"]["xrplRpc"]
            .as_str()
            .unwrap()
            .contains("altnet")
    );
    assert_eq!(document["panels"].as_array().unwrap().len(), 6);
}

#[test]
/// Reset command should delete an existing config file.
fn reset_config_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset-config")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Configuration cleared"));

    assert!(!config_path.exists());
}
