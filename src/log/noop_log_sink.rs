use crate::log::log_sink::LogSink;

/// Discards everything. Installed until a logger is configured.
#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn write_line(&self, _line: &str) {}
}
