//! `lvlog` is a small leveled logging facility.
//!
//! Records are gated by a severity threshold and routed to the console, an
//! append-only file under `log/`, both, or nowhere. Each line carries a
//! severity tag, the local date and time, and the `file:line` of the call.
//!
//! Two ways to use it:
//! - an explicit [`Logger`], isolated from everything else;
//! - the process-wide logger in [`log::global`], reached through the
//!   `log_trace!` .. `log_error!` macros.
//!
//! ```rust,no_run
//! use lvlog::{LogLevel, SinkFlag, log_info, log_trace};
//!
//! lvlog::log::global::configure("app", SinkFlag::CONSOLE_FILE, LogLevel::Info);
//! log_info!("value={}", 42);
//! log_trace!("filtered out");
//! ```

/// Logger setup gathered into one value.
pub mod config;
/// Levels, sinks, the logger and its macros.
pub mod log;

pub use config::LoggerConfig;
pub use log::error::ConfigureError;
pub use log::log_level::LogLevel;
pub use log::log_sink::LogSink;
pub use log::logger::{Logger, LoggerBuilder};
pub use log::sink_flag::SinkFlag;
