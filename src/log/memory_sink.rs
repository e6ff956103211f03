use std::sync::{Mutex, PoisonError};

use crate::log::log_sink::LogSink;

/// Keeps every line in memory.
///
/// Handy as a console stand-in when the output has to be inspected, e.g.
/// `Logger::builder().console_sink(Arc::new(MemorySink::new()))`.
#[derive(Debug, Default)]
pub struct MemorySink {
    buf: Mutex<Vec<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured lines without their trailing newline.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        buf.iter()
            .map(|l| l.strip_suffix('\n').unwrap_or(l).to_owned())
            .collect()
    }

    /// Everything written so far, concatenated.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .concat()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
    }
}
