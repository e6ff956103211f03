use std::{fmt, panic::Location};

use chrono::{DateTime, Local};

use crate::log::log_level::LogLevel;

/// Appended to the message when one of its arguments fails to format.
pub const FORMAT_ERROR_MARKER: &str = "%!(FORMAT ERROR)";

/// Source position a record is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A resolved `file:line`.
    At { file: &'static str, line: u32 },
    /// Attribution was requested from a frame that cannot be resolved.
    Unknown,
}

impl Origin {
    #[must_use]
    pub fn from_location(loc: &'static Location<'static>) -> Self {
        Origin::At {
            file: loc.file(),
            line: loc.line(),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Origin::At { file, line } => write!(f, "{}:{line}", short_file(file)),
            Origin::Unknown => f.write_str("???:0"),
        }
    }
}

/// A single record ready to be rendered.
#[derive(Debug, Clone)]
pub struct LogMsg {
    /// The severity level of the record.
    pub level: LogLevel,
    /// Wall-clock time at which the record was created.
    pub timestamp: DateTime<Local>,
    /// Where the record was emitted from.
    pub origin: Origin,
    /// The interpolated message.
    pub text: String,
}

impl LogMsg {
    /// Interpolates `args` and stamps the record with the current local time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lvlog::log::log_level::LogLevel;
    /// use lvlog::log::log_msg::{LogMsg, Origin};
    ///
    /// let msg = LogMsg::new(LogLevel::Info, format_args!("value={}", 42), Origin::Unknown);
    /// assert_eq!(msg.text, "value=42");
    /// assert!(msg.render().starts_with("[I] "));
    /// ```
    pub fn new(level: LogLevel, args: fmt::Arguments<'_>, origin: Origin) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            origin,
            text: format_message(args),
        }
    }

    /// Renders `<tag><date> <time> <file>:<line>: <text>` with exactly one
    /// trailing newline.
    ///
    /// A message that already ends in `\n` is not given a second one, so no
    /// blank line follows it in the output.
    #[must_use]
    pub fn render(&self) -> String {
        let mut line = format!(
            "{}{} {}: {}",
            self.level.tag(),
            self.timestamp.format("%Y/%m/%d %H:%M:%S"),
            self.origin,
            self.text
        );
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

/// Interpolates `args`. A failing `Display` impl does not abort the record:
/// the text rendered so far is kept and [`FORMAT_ERROR_MARKER`] is appended.
#[must_use]
pub fn format_message(args: fmt::Arguments<'_>) -> String {
    if let Some(literal) = args.as_str() {
        return literal.to_owned();
    }
    let mut text = String::new();
    if fmt::write(&mut text, args).is_err() {
        text.push_str(FORMAT_ERROR_MARKER);
    }
    text
}

/// Final path component, accepting both separators.
fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn short_file_strips_directories() {
        assert_eq!(short_file("src/log/logger.rs"), "logger.rs");
        assert_eq!(short_file(r"C:\work\main.rs"), "main.rs");
        assert_eq!(short_file("main.rs"), "main.rs");
    }

    #[test]
    fn render_has_tag_timestamp_origin_and_message() {
        let msg = LogMsg::new(
            LogLevel::Warning,
            format_args!("disk at {}%", 90),
            Origin::At {
                file: "src/bin/app.rs",
                line: 17,
            },
        );
        let line = msg.render();

        assert!(line.starts_with("[W] "), "{line}");
        assert!(line.ends_with(" app.rs:17: disk at 90%\n"), "{line}");
        // [W] YYYY/MM/DD HH:MM:SS
        let stamp = &line[4..23];
        chrono::NaiveDateTime::parse_from_str(stamp, "%Y/%m/%d %H:%M:%S")
            .expect("parseable date/time prefix");
    }

    #[test]
    fn render_does_not_double_a_trailing_newline() {
        let msg = LogMsg::new(LogLevel::Info, format_args!("done\n"), Origin::Unknown);
        let line = msg.render();
        assert!(line.ends_with("???:0: done\n"));
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn failing_argument_leaves_an_inline_marker() {
        let text = format_message(format_args!("before {} after", Broken));
        assert_eq!(text, format!("before {FORMAT_ERROR_MARKER}"));
    }
}
