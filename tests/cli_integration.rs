//! CLI integration tests.
//!
//! These tests verify argument parsing, configuration loading, and the
//! binary's exit contract.

use std::ffi::OsString;
use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

use authlink::cli::{parse_args_from, Args};
use authlink::config::Config;
use authlink::App;

fn args(args: &[&str]) -> Vec<OsString> {
    std::iter::once("authlink")
        .chain(args.iter().copied())
        .map(OsString::from)
        .collect()
}

fn binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_authlink"));
    for var in [
        "AUTHLINK_DB_HOST",
        "AUTHLINK_DB_LOGIN",
        "AUTHLINK_DB_PASSWORD",
        "AUTHLINK_CACHE_HOST",
        "AUTHLINK_CACHE_LOGIN",
        "AUTHLINK_CACHE_PASSWORD",
        "AUTHLINK_LOG_LEVEL",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

// ============================================================================
// CLI Argument Tests
// ============================================================================

#[test]
fn test_cli_defaults() {
    let result = parse_args_from(args(&[])).unwrap();

    assert!(result.config.is_none());
    assert!(result.db_host.is_none());
    assert!(result.cache_host.is_none());
    assert!(result.log_level.is_none());
}

#[test]
fn test_cli_full_options() {
    let result = parse_args_from(args(&[
        "--db-host",
        "db",
        "--db-login",
        "app",
        "--cache-host",
        "cache",
        "--cache-password",
        "pw",
        "-l",
        "debug",
    ]))
    .unwrap();

    assert_eq!(result.db_host.as_deref(), Some("db"));
    assert_eq!(result.db_login.as_deref(), Some("app"));
    assert_eq!(result.cache_host.as_deref(), Some("cache"));
    assert_eq!(result.cache_password.as_deref(), Some("pw"));
    assert_eq!(result.log_level.as_deref(), Some("debug"));
}

#[test]
fn test_cli_config_file() {
    let result = parse_args_from(args(&["-c", "/etc/authlink.json"])).unwrap();

    assert_eq!(
        result.config.unwrap().to_str().unwrap(),
        "/etc/authlink.json"
    );
}

// ============================================================================
// Configuration Loading Tests
// ============================================================================

#[test]
fn test_config_file_then_args() {
    let json = r#"{
        "datastore": { "host": "db.from.file", "login": "filelogin" },
        "session_cache": { "host": "cache.from.file" }
    }"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let args = Args {
        config: Some(file.path().to_path_buf()),
        db_host: Some("db.from.args".to_string()),
        ..Args::default()
    };

    let mut config = Config::from_file(file.path()).unwrap();
    config.apply_args(&args);

    assert_eq!(config.datastore.host, "db.from.args");
    assert_eq!(config.datastore.login, "filelogin");
    assert_eq!(config.session_cache.host, "cache.from.file");
}

#[test]
fn test_app_from_loaded_config() {
    let json = r#"{ "datastore": { "host": "db" }, "session_cache": { "host": "cache" } }"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    let app = App::from_config(&config).unwrap();

    assert_eq!(app.store.params().host, "db");
    assert_eq!(app.authority.params().host, "cache");
}

// ============================================================================
// Binary Tests
// ============================================================================

#[test]
fn test_binary_prints_success() {
    let output = binary().output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Success!");
}

#[test]
fn test_binary_missing_config_file_fails() {
    let output = binary()
        .args(["-c", "/nonexistent/authlink.json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Fatal error"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Success!"));
}

#[test]
fn test_binary_empty_host_in_config_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "datastore": { "host": "" } }"#).unwrap();

    let output = binary()
        .arg("-c")
        .arg(file.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("datastore.host"));
}

#[test]
fn test_binary_bad_argument_is_usage_error() {
    let output = binary().arg("--bogus").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_binary_version() {
    let output = binary().arg("--version").output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("authlink "));
}
