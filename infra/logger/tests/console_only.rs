use proctor_logger::{LogLevel, Logger, Subscriber};

#[test]
fn console_only_subscriber_has_no_file_writer() {
    let guard = Subscriber::builder()
        .name("integration-console-only")
        .console(true)
        .level(LogLevel::Info)
        .init()
        .expect("subscriber should install");

    assert!(!guard.writes_files(), "console-only subscriber should not spawn a file writer");
    assert_eq!(guard.name(), "integration-console-only");

    let mut logger = Logger::new(LogLevel::Info);
    assert!(logger.info("mirrored to the console"));
    assert_eq!(logger.record().len(), 1);
}
