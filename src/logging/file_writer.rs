//! Daily log file handling
//!
//! Resolves the date-stamped file name and opens it in append mode.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::LoggerError;

/// Prefix shared by every bot log file
pub const LOG_FILE_PREFIX: &str = "bot-";

/// Extension shared by every bot log file
pub const LOG_FILE_EXTENSION: &str = ".log";

/// Build the log file path for a given calendar date
pub fn log_file_path(logs_dir: &Path, date: NaiveDate) -> PathBuf {
    logs_dir.join(format!(
        "{}{}{}",
        LOG_FILE_PREFIX,
        date.format("%Y-%m-%d"),
        LOG_FILE_EXTENSION
    ))
}

/// Check whether a file name looks like one of our daily log files
pub fn is_log_file_name(name: &str) -> bool {
    name.starts_with(LOG_FILE_PREFIX) && name.ends_with(LOG_FILE_EXTENSION)
}

/// Ensure the logs directory exists and open the file for `date`
///
/// The file is created if absent and appended to otherwise. On Unix it is
/// created with owner read/write permissions only.
pub fn open_log_file(logs_dir: &Path, date: NaiveDate) -> Result<(File, PathBuf), LoggerError> {
    fs::create_dir_all(logs_dir).map_err(|source| LoggerError::CreateDirectory {
        path: logs_dir.to_path_buf(),
        source,
    })?;

    let log_path = log_file_path(logs_dir, date);

    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let file = options
        .open(&log_path)
        .map_err(|source| LoggerError::OpenFile {
            path: log_path.clone(),
            source,
        })?;

    Ok((file, log_path))
}
