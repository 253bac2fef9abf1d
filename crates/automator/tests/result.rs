use proctor_automator::{AutomationResult, AutomatorError, Config, LogLevel, Status};
use serde_json::json;
use std::sync::Arc;

fn fresh() -> AutomationResult {
    AutomationResult::new(Config::builder().id("run-1").log_level(LogLevel::Info).build())
}

#[test]
fn new_result_is_a_success() {
    let result = fresh();
    assert_eq!(result.status(), Status::Success);
    assert!(result.is_success());
    assert!(!result.is_failure());
    assert!(!result.is_error());
    assert!(result.data_log().is_empty());
    assert!(result.logger().record().is_empty());
}

#[test]
fn failure_then_error_stays_failure() {
    let mut result = fresh();
    assert_eq!(result.failure(), Status::Failure);
    assert_eq!(result.error(), Status::Failure);
    assert!(result.is_failure());
    assert!(!result.is_error());
}

#[test]
fn error_then_failure_stays_error() {
    let mut result = fresh();
    assert_eq!(result.error(), Status::Error);
    assert_eq!(result.failure(), Status::Error);
    assert!(result.is_error());
    assert!(!result.is_failure());
}

#[test]
fn repeated_failure_is_idempotent() {
    let mut once = fresh();
    once.failure();

    let mut twice = fresh();
    twice.failure();
    twice.failure();

    assert_eq!(once.status(), twice.status());
}

#[test]
fn record_data_overwrites() -> Result<(), AutomatorError> {
    let mut result = fresh();
    assert_eq!(result.record_data("x", 1)?, &json!(1));
    assert_eq!(result.record_data("x", 2)?, &json!(2));
    result.record_data("x", 2)?;
    assert_eq!(result.data_log().get("x"), Some(&json!(2)));
    assert_eq!(result.data_log().len(), 1);
    Ok(())
}

#[test]
fn record_data_without_key_fails_and_leaves_log_unchanged() -> Result<(), AutomatorError> {
    let mut result = fresh();
    result.record_data("kept", "value")?;

    let err = result.record_data(None::<&str>, 1).expect_err("absent key must fail");
    assert!(matches!(err, AutomatorError::InvalidArgument { .. }));
    assert_eq!(err.to_string(), "Invalid argument: Key is required");

    assert_eq!(result.data_log().len(), 1);
    assert_eq!(result.data_log().get("kept"), Some(&json!("value")));
    Ok(())
}

#[test]
fn record_data_accepts_empty_and_whitespace_keys() -> Result<(), AutomatorError> {
    let mut result = fresh();
    assert_eq!(result.record_data(" ", 1)?, &json!(1));
    assert_eq!(result.record_data("", 2)?, &json!(2));
    assert_eq!(result.record_data(Some("named"), 3)?, &json!(3));

    assert_eq!(result.data_log().get(" "), Some(&json!(1)));
    assert_eq!(result.data_log().get(""), Some(&json!(2)));
    assert_eq!(result.data_log().len(), 3);
    Ok(())
}

#[test]
fn results_from_one_config_share_it() {
    let config = Arc::new(Config::default());
    let first = AutomationResult::new(Arc::clone(&config));
    let second = AutomationResult::new(first.shared_config());
    assert_eq!(first.id(), second.id());
    assert!(Arc::ptr_eq(&first.shared_config(), &second.shared_config()));
}

#[test]
fn time_wraps_timing_errors() -> Result<(), AutomatorError> {
    let mut result = fresh();
    let items = result.time("load-cart", || 3)?;
    assert_eq!(items, 3);

    result.timer_mut().start("checkout").map_err(AutomatorError::from)?;
    let err = result.time("checkout", || ()).expect_err("already running");
    assert!(matches!(err, AutomatorError::Timing { .. }));
    Ok(())
}

#[test]
fn report_captures_everything() -> Result<(), Box<dyn std::error::Error>> {
    let mut result = fresh();
    result.record_data("orders", json!([1, 2]))?;
    result.logger_mut().warning("slow response");
    result.time("submit", || ())?;
    result.failure();

    let report = serde_json::to_value(result.report())?;
    assert_eq!(report["id"], "run-1");
    assert_eq!(report["status"], "FAILURE");
    assert_eq!(report["log_level"], "INFO");
    assert_eq!(report["data"]["orders"], json!([1, 2]));
    assert_eq!(report["log"][0]["message"], "slow response");
    assert_eq!(report["timings"][0]["name"], "submit");
    Ok(())
}
