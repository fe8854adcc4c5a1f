use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::{json, Value};
use smartwill_auth::config::{CONFIG_PATH_ENV, MODE_ENV};

fn navcheck() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_smartwill-navcheck"));
    cmd.env_remove(CONFIG_PATH_ENV)
        .env_remove(MODE_ENV)
        .env("RUST_LOG", "warn");
    cmd
}

fn report(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "navcheck failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is a JSON report")
}

fn write_config(name: &str, config: &Value) -> PathBuf {
    let path = std::env::temp_dir().join(format!("smartwill-navcheck-{name}-{}.json", std::process::id()));
    std::fs::write(&path, config.to_string()).unwrap();
    path
}

fn small_config(mode: &str) -> Value {
    json!({
        "mode": mode,
        "tabs": [
            {"id": "dashboard", "label": "Dashboard"},
            {"id": "legacy", "label": "Legacy"}
        ],
        "roles": {
            "owner": ["dashboard", "legacy", "retired-tab"],
            "heir": ["legacy"],
            "verifier": ["dashboard"]
        }
    })
}

#[test]
fn without_env_uses_built_in_navigation() {
    let output = navcheck().output().unwrap();
    let report = report(&output);

    assert_eq!(report["mode"], "strict");
    assert_eq!(report["catalog"].as_array().unwrap().len(), 11);
    let heir: Vec<&str> = report["roles"]["heir"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(heir, vec!["dashboard", "assets", "legacy", "heir-view"]);
}

#[test]
fn loads_config_file_and_applies_mode_override() {
    let path = write_config("override", &small_config("strict"));

    // Strict file with a stale allow-list entry fails the self-check.
    let output = navcheck().env(CONFIG_PATH_ENV, &path).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("retired-tab"));

    let output = navcheck()
        .env(CONFIG_PATH_ENV, &path)
        .env(MODE_ENV, "lenient")
        .output()
        .unwrap();
    let report = report(&output);
    assert_eq!(report["mode"], "lenient");
    assert_eq!(report["catalog"], json!(["dashboard", "legacy"]));
    assert_eq!(report["roles"]["owner"].as_array().unwrap().len(), 2);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_config_file_exits_non_zero() {
    let output = navcheck()
        .env(CONFIG_PATH_ENV, "/nonexistent/smartwill-nav.json")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn explains_a_single_decision() {
    let output = navcheck().args(["heir", "deploy"]).output().unwrap();
    let report = report(&output);
    assert_eq!(report["explanation"]["granted"], false);
    assert_eq!(report["explanation"]["role"], "heir");
}

#[cfg(unix)]
#[test]
fn non_unicode_config_path_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = navcheck()
        .env(CONFIG_PATH_ENV, OsStr::from_bytes(b"/tmp/nav-\xff.json"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid unicode"));
}
