use std::{fmt, str::FromStr};

use crate::log::error::ParseLevelError;

/// Defines the severity levels for log messages.
///
/// Levels are ordered: a logger configured with a threshold emits every
/// record whose level compares greater than or equal to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Designates very fine-grained informational events.
    #[default]
    Trace = 0,
    /// Designates informational messages that highlight the progress of the application.
    Info = 1,
    /// Designates potentially harmful situations.
    Warning = 2,
    /// Designates error events that might still allow the application to continue running.
    Error = 3,
}

impl LogLevel {
    /// All levels, lowest first.
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Trace,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    /// Prefix written at the start of every line of this level.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Trace => "[T] ",
            LogLevel::Info => "[I] ",
            LogLevel::Warning => "[W] ",
            LogLevel::Error => "[E] ",
        }
    }

    /// Numeric code of the level (`0 = trace` .. `3 = error`).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ParseLevelError;

    fn try_from(code: u8) -> Result<Self, ParseLevelError> {
        match code {
            0 => Ok(LogLevel::Trace),
            1 => Ok(LogLevel::Info),
            2 => Ok(LogLevel::Warning),
            3 => Ok(LogLevel::Error),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return LogLevel::try_from(code).map_err(|_| ParseLevelError(s.to_owned()));
        }
        match s.to_ascii_lowercase().as_str() {
            "trace" | "t" => Ok(LogLevel::Trace),
            "info" | "i" => Ok(LogLevel::Info),
            "warning" | "warn" | "w" => Ok(LogLevel::Warning),
            "error" | "e" => Ok(LogLevel::Error),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
