//! Pruning of old daily log files
//!
//! One file is written per calendar day, so a long-running bot needs the
//! old ones removed. Age is judged by last modification, not by the date in
//! the file name, so a file still being appended to is never pruned.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};

use super::file_writer::is_log_file_name;

/// Days a log file is kept when no retention is configured
pub const DEFAULT_RETENTION_DAYS: u64 = 7;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Remove bot log files untouched for longer than [`DEFAULT_RETENTION_DAYS`]
///
/// Returns how many files were removed.
pub fn cleanup_old_logs(logs_dir: &Path) -> Result<usize> {
    cleanup_old_logs_with_retention(logs_dir, DEFAULT_RETENTION_DAYS)
}

/// Remove bot log files untouched for longer than `retention_days`
///
/// A missing directory counts as nothing to do. Files that cannot be removed
/// are skipped. Returns how many files were removed.
pub fn cleanup_old_logs_with_retention(logs_dir: &Path, retention_days: u64) -> Result<usize> {
    if !logs_dir.is_dir() {
        return Ok(0);
    }

    let keep_for = Duration::from_secs(retention_days.saturating_mul(SECS_PER_DAY));
    let cutoff = SystemTime::now()
        .checked_sub(keep_for)
        .unwrap_or(SystemTime::UNIX_EPOCH);

    let removed = expired_log_files(logs_dir, cutoff)?
        .into_iter()
        .filter(|path| fs::remove_file(path).is_ok())
        .count();

    Ok(removed)
}

/// Bot log files in `logs_dir` last modified before `cutoff`
fn expired_log_files(logs_dir: &Path, cutoff: SystemTime) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(logs_dir)
        .with_context(|| format!("Failed to read logs directory {}", logs_dir.display()))?;

    let mut expired = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read logs directory entry")?;

        let is_ours = entry.file_name().to_str().is_some_and(is_log_file_name);
        if !is_ours {
            continue;
        }

        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        let modified_before_cutoff = metadata.is_file()
            && metadata
                .modified()
                .map(|modified| modified < cutoff)
                .unwrap_or(false);

        if modified_before_cutoff {
            expired.push(entry.path());
        }
    }

    Ok(expired)
}
