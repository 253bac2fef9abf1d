use proctor_kernel::config::{env_source_from, load_config, load_config_with_env};
use serde::Deserialize;
use serde_json::{Value, json};
use serial_test::serial;
use std::collections::BTreeMap;
use std::fs;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Settings {
    id: Option<String>,
    log_level: Option<String>,
    flags: BTreeMap<String, Value>,
}

#[test]
#[serial]
fn reads_values_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("proctor.toml");
    fs::write(&path, "id = \"nightly\"\nlog_level = \"info\"\n\n[flags]\nheadless = true\n")?;

    let settings: Settings = load_config(Some(&path))?;
    assert_eq!(settings.id.as_deref(), Some("nightly"));
    assert_eq!(settings.log_level.as_deref(), Some("info"));
    assert_eq!(settings.flags.get("headless"), Some(&json!(true)));
    Ok(())
}

#[test]
#[serial]
fn missing_file_yields_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let settings: Settings = load_config(Some(dir.path().join("absent.toml")))?;
    assert!(settings.id.is_none());
    assert!(settings.log_level.is_none());
    assert!(settings.flags.is_empty());
    Ok(())
}

#[test]
#[serial]
fn malformed_file_reports_context() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "log_level = [\n")?;

    let err = load_config::<Settings>(Some(&path)).expect_err("malformed file must fail");
    assert!(err.to_string().contains("Failed to build settings"), "unexpected error: {err}");
    Ok(())
}

#[test]
#[serial]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("proctor.toml");
    fs::write(&path, "id = \"nightly\"\nlog_level = \"debug\"\n\n[flags]\nheadless = false\n")?;

    let env = env_source_from([
        ("PROCTOR__LOG_LEVEL", "info"),
        ("PROCTOR__FLAGS__HEADLESS", "true"),
        ("OTHER__LOG_LEVEL", "fatal"),
    ]);
    let settings: Settings = load_config_with_env(Some(&path), env)?;

    assert_eq!(settings.id.as_deref(), Some("nightly"));
    assert_eq!(settings.log_level.as_deref(), Some("info"));
    assert_eq!(settings.flags.get("headless"), Some(&json!(true)));
    Ok(())
}

#[test]
#[serial]
fn environment_alone_fills_settings() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let env = env_source_from([("PROCTOR__ID", "from-env"), ("PROCTOR__FLAGS__RETRIES", "3")]);
    let settings: Settings = load_config_with_env(Some(dir.path().join("absent.toml")), env)?;

    assert_eq!(settings.id.as_deref(), Some("from-env"));
    assert!(settings.log_level.is_none());
    assert_eq!(settings.flags.get("retries"), Some(&json!(3)));
    Ok(())
}
