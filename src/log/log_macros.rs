//! Leveled logging macros for the process-wide logger and for explicit `Logger`s.
//!
//! # Feature Flags
//! Specific log levels are controlled by cargo features:
//! `log-trace`, `log-info`, `log-warn`, `log-error`.
//!
//! If a feature is disabled, the corresponding macros expand to `()`, removing
//! all formatting and the call itself at compile time. The `Logger` methods are
//! not affected.

// ============================================================================
// 1. GENERIC INTERNAL MACROS (The "Workers")
// ============================================================================

#[macro_export]
macro_rules! global_log {
    ($lvl:expr, $($arg:tt)+) => {{
        $crate::log::global::logger().log($lvl, ::std::format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)+) => {{
        $logger.log($lvl, ::std::format_args!($($arg)+))
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! log_trace    { ($($arg:tt)+)               => { $crate::global_log!($crate::log::log_level::LogLevel::Trace, $($arg)+) } }
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! logger_trace { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Trace, $($arg)+) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! logger_trace {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info    { ($($arg:tt)+)               => { $crate::global_log!($crate::log::log_level::LogLevel::Info, $($arg)+) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Info, $($arg)+) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARNING ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! log_warning    { ($($arg:tt)+)               => { $crate::global_log!($crate::log::log_level::LogLevel::Warning, $($arg)+) } }
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! logger_warning { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Warning, $($arg)+) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! logger_warning {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
// Generally always enabled, but consistent structure allows user to disable if really needed.
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error    { ($($arg:tt)+)               => { $crate::global_log!($crate::log::log_level::LogLevel::Error, $($arg)+) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)+) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Error, $($arg)+) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(all(test, feature = "log-trace"))]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use crate::log::{log_level::LogLevel, logger::Logger, memory_sink::MemorySink, sink_flag::SinkFlag};
    use std::sync::Arc;

    #[test]
    fn logger_macros_interpolate_and_tag() {
        let console = Arc::new(MemorySink::new());
        let logger = Logger::builder().console_sink(console.clone()).build();
        logger.configure("", SinkFlag::CONSOLE, LogLevel::Trace);

        let user = "ana";
        logger_trace!(logger, "t {}", 1);
        logger_info!(&logger, "hello {user}");
        logger_warning!(logger, "w{:03}", 7);
        logger_error!(logger, "plain");

        let lines = console.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("[T] ") && lines[0].ends_with(": t 1"));
        assert!(lines[1].starts_with("[I] ") && lines[1].ends_with(": hello ana"));
        assert!(lines[2].starts_with("[W] ") && lines[2].ends_with(": w007"));
        assert!(lines[3].starts_with("[E] ") && lines[3].ends_with(": plain"));
    }

    #[test]
    fn macro_call_site_is_recorded() {
        let console = Arc::new(MemorySink::new());
        let logger = Logger::builder().console_sink(console.clone()).build();
        logger.configure("", SinkFlag::CONSOLE, LogLevel::Trace);

        let line_no = line!() + 1;
        logger_info!(logger, "here");

        let expected = format!("log_macros.rs:{line_no}: here");
        assert!(console.lines()[0].ends_with(&expected), "{:?}", console.lines());
    }
}
