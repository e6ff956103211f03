use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure while preparing the file sink in [`Logger::try_configure`].
///
/// The logger is still reconfigured when one of these is returned; the file
/// half of the route is replaced by a discard sink.
///
/// [`Logger::try_configure`]: crate::log::logger::Logger::try_configure
#[derive(Debug, Error)]
pub enum ConfigureError {
    #[error("cannot create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open log file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigureError {
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigureError::CreateDir { path, .. } | ConfigureError::OpenFile { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level `{0}` (expected trace, info, warning, error or 0-3)")]
pub struct ParseLevelError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sink flag `{0}` (expected none, console, file, console-file or a bitmask)")]
pub struct ParseSinkFlagError(pub String);
