//! Process-wide logger behind free functions.
//!
//! The instance is created lazily on first use, unconfigured, with a call
//! depth of [`GLOBAL_CALL_DEPTH`]. Prefer an explicit [`Logger`] where the
//! output has to be isolated, e.g. in tests.

use std::{fmt, sync::OnceLock};

use crate::log::{
    error::ConfigureError, log_level::LogLevel, logger::Logger, sink_flag::SinkFlag,
};

/// The free functions add one frame on top of the `Logger` methods.
pub const GLOBAL_CALL_DEPTH: i32 = 2;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// The shared logger, created on first access.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::builder().call_depth(GLOBAL_CALL_DEPTH).build())
}

/// See [`Logger::configure`].
pub fn configure(name: &str, flag: impl Into<SinkFlag>, level: LogLevel) {
    logger().configure(name, flag, level);
}

/// See [`Logger::try_configure`].
///
/// # Errors
/// Same as [`Logger::try_configure`].
pub fn try_configure(
    name: &str,
    flag: impl Into<SinkFlag>,
    level: LogLevel,
) -> Result<(), ConfigureError> {
    logger().try_configure(name, flag, level)
}

pub fn set_call_depth(depth: i32) {
    logger().set_call_depth(depth);
}

#[track_caller]
pub fn trace(args: fmt::Arguments<'_>) {
    logger().trace(args);
}

#[track_caller]
pub fn info(args: fmt::Arguments<'_>) {
    logger().info(args);
}

#[track_caller]
pub fn warning(args: fmt::Arguments<'_>) {
    logger().warning(args);
}

#[track_caller]
pub fn error(args: fmt::Arguments<'_>) {
    logger().error(args);
}
