use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up or writing the bot log
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The logs directory could not be created
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The daily log file could not be opened
    #[error("failed to open log file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line could not be written to one of its destinations
    ///
    /// Never returned to callers; only handed to the write-error hook.
    #[error("failed to write log line to {destination}: {source}")]
    Write {
        destination: &'static str,
        #[source]
        source: io::Error,
    },
}
