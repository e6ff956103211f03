//! The process-wide logger is shared state, so this binary holds one test.

use lvlog::{LogLevel, SinkFlag, log::global, log_error, log_info};

#[test]
fn global_logger_lifecycle() {
    // Unconfigured: discards silently.
    log_error!("boom");
    let logger = global::logger();
    assert!(!logger.is_configured());
    assert_eq!(logger.call_depth(), global::GLOBAL_CALL_DEPTH);
    assert!(!logger.is_enabled(LogLevel::Error));

    global::configure("", SinkFlag::CONSOLE, LogLevel::Warning);
    assert!(logger.is_configured());
    assert!(logger.is_enabled(LogLevel::Warning));
    assert!(!logger.is_enabled(LogLevel::Info));
    log_info!("filtered");
    global::warning(format_args!("visible on stdout"));

    global::set_call_depth(5);
    assert_eq!(global::logger().call_depth(), 5);

    global::configure("", SinkFlag::NONE, LogLevel::Trace);
    assert!(!logger.is_enabled(LogLevel::Error));
    assert_eq!(logger.log_file(), None);
}
