//! Logging system for the bot
//!
//! Provides a leveled logger writing to a daily file with console mirroring
//! for warnings and errors, retention cleanup for old files, and a bridge
//! for `tracing` events.

mod error;
mod file_writer;
mod layer;
mod logger;
mod retention;
mod severity;

#[cfg(test)]
pub(crate) mod testing;

pub use error::LoggerError;
pub use file_writer::{log_file_path, LOG_FILE_EXTENSION, LOG_FILE_PREFIX};
pub use layer::BotLogLayer;
pub use logger::{BotLogger, SourceLocation, WriteErrorHook};
pub use retention::{cleanup_old_logs, cleanup_old_logs_with_retention, DEFAULT_RETENTION_DAYS};
pub use severity::Severity;

/// Log an error through a [`BotLogger`]
///
/// ```
/// # let logger = bot_logger::logging::BotLogger::new();
/// bot_logger::bot_error!(logger, "failed to join channel {}", 42);
/// ```
#[macro_export]
macro_rules! bot_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}

/// Log a warning through a [`BotLogger`]
#[macro_export]
macro_rules! bot_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::std::format_args!($($arg)+))
    };
}

/// Log an informational message through a [`BotLogger`]
#[macro_export]
macro_rules! bot_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

/// Log a debug message through a [`BotLogger`]
#[macro_export]
macro_rules! bot_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}
