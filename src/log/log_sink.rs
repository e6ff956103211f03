use std::{
    io::{self, Write},
    sync::Arc,
};

/// A destination for rendered log lines.
///
/// Each call receives one complete line (newline included) and must write it
/// in a single operation so lines from concurrent callers never interleave.
/// Implementations swallow I/O errors: logging must not fail the caller.
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Writes to the process standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    #[inline]
    fn write_line(&self, line: &str) {
        // `StdoutLock` keeps other threads out for the whole line.
        let mut out = io::stdout().lock();
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }
}

/// Broadcasts every line to each inner sink, in order.
#[derive(Clone, Default)]
pub struct FanOutSink {
    sinks: Vec<Arc<dyn LogSink>>,
}

impl FanOutSink {
    #[must_use]
    pub fn new(sinks: Vec<Arc<dyn LogSink>>) -> Self {
        Self { sinks }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl LogSink for FanOutSink {
    fn write_line(&self, line: &str) {
        for sink in &self.sinks {
            sink.write_line(line);
        }
    }
}
