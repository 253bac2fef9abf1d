use proctor::prelude::*;
use serde_json::json;

#[test]
fn prelude_covers_a_full_run() -> Result<(), AutomatorError> {
    let flags = Flags::from_map([("headless", true)]);
    let config = Config::builder().flags(flags.clone()).log_level(LogLevel::Warning).build();
    let mut result = AutomationResult::new(config);

    assert!(Flags::ptr_eq(result.config().flags(), &flags));
    result.record_data("browser", "firefox")?;
    result.time("login", || ())?;
    assert!(!result.logger_mut().info("filtered"));
    assert!(result.logger_mut().warning("retrying login"));
    assert_eq!(result.failure(), Status::Failure);

    assert_eq!(result.data_log().get("browser"), Some(&json!("firefox")));
    assert_eq!(result.logger().record().len(), 1);
    assert_eq!(result.timer().entries().len(), 1);
    Ok(())
}
