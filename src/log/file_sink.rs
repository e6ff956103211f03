use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use crate::log::log_sink::LogSink;

/// Append-only log file shared by every level of a logger.
#[derive(Debug)]
pub struct FileSink {
    file: Mutex<File>,
    path: PathBuf,
}

impl FileSink {
    /// Opens `path` for appending, creating it when absent.
    ///
    /// # Errors
    /// Returns the underlying I/O error when the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn write_line(&self, line: &str) {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = file.write_all(line.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::fs;

    #[test]
    fn appends_to_existing_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        fs::write(&path, "earlier\n").expect("seed file");

        let sink = FileSink::open(&path).expect("open sink");
        sink.write_line("later\n");
        drop(sink);

        assert_eq!(fs::read_to_string(&path).unwrap(), "earlier\nlater\n");
    }

    #[test]
    fn reopening_keeps_previous_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("twice.log");

        FileSink::open(&path).unwrap().write_line("first\n");
        let sink = FileSink::open(&path).unwrap();
        sink.write_line("second\n");
        assert_eq!(sink.path(), path.as_path());

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_fails_when_parent_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = FileSink::open(dir.path().join("missing").join("x.log")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
