//! Leveled file/console logger
//!
//! Every line goes to the daily log file. Errors are mirrored to stderr and
//! warnings to stdout; info and debug stay in the file.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local, NaiveDate};

use super::file_writer::open_log_file;
use super::{LoggerError, Severity};

/// Callback invoked when a log line could not be written
pub type WriteErrorHook = Arc<dyn Fn(&LoggerError) + Send + Sync>;

type ConsoleWriter = Box<dyn Write + Send>;

/// Source position stamped on each line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> SourceLocation<'a> {
    pub fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the code calling into the logger
    #[track_caller]
    pub fn caller() -> SourceLocation<'static> {
        let location = std::panic::Location::caller();
        SourceLocation {
            file: location.file(),
            line: location.line(),
        }
    }

    /// File name without its directories
    pub fn short_file(&self) -> &'a str {
        Path::new(self.file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(self.file)
    }
}

/// Console stream a severity is mirrored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Console {
    Stdout,
    Stderr,
}

fn console_for(severity: Severity) -> Option<Console> {
    match severity {
        Severity::Error => Some(Console::Stderr),
        Severity::Warn => Some(Console::Stdout),
        Severity::Info | Severity::Debug => None,
    }
}

/// Format one log line, newline included
fn format_line(
    severity: Severity,
    location: &SourceLocation<'_>,
    args: fmt::Arguments<'_>,
    now: &DateTime<Local>,
) -> String {
    let mut line = format!(
        "{}{} {}:{}: {}",
        severity.tag(),
        now.format("%Y/%m/%d %H:%M:%S"),
        location.short_file(),
        location.line,
        args
    );
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

/// The currently open daily file
struct OpenLog {
    file: File,
    path: PathBuf,
    logs_dir: PathBuf,
    date: NaiveDate,
    threshold: Severity,
}

impl OpenLog {
    /// Switch to the file for `date`, keeping the current one on failure
    fn roll_over(&mut self, date: NaiveDate) -> Result<(), LoggerError> {
        let (file, path) = open_log_file(&self.logs_dir, date)?;
        let _ = self.file.flush();
        self.file = file;
        self.path = path;
        self.date = date;
        Ok(())
    }
}

struct LoggerState {
    open: Option<OpenLog>,
    stdout: ConsoleWriter,
    stderr: ConsoleWriter,
    hook: Option<WriteErrorHook>,
}

/// Leveled logger writing to a daily file and the console
///
/// The logger starts uninitialized; until [`BotLogger::init`] succeeds every
/// logging call is silently dropped. Share it between tasks with an `Arc`.
pub struct BotLogger {
    state: Mutex<LoggerState>,
}

impl BotLogger {
    /// Create an uninitialized logger mirroring to the process stdout/stderr
    pub fn new() -> Self {
        Self::with_console(io::stdout(), io::stderr())
    }

    /// Create an uninitialized logger with custom console streams
    pub fn with_console(
        stdout: impl Write + Send + 'static,
        stderr: impl Write + Send + 'static,
    ) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                open: None,
                stdout: Box::new(stdout),
                stderr: Box::new(stderr),
                hook: None,
            }),
        }
    }

    // Lines are written whole under the lock, so a poisoned state is still consistent.
    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open today's log file in `logs_dir` and start logging at `threshold`
    ///
    /// Re-initializing closes the previously open file once the new one is
    /// open. On failure the logger keeps whatever state it had before.
    #[track_caller]
    pub fn init(
        &self,
        logs_dir: impl AsRef<Path>,
        threshold: Severity,
    ) -> Result<(), LoggerError> {
        let logs_dir = logs_dir.as_ref();
        let today = Local::now().date_naive();
        let (file, path) = open_log_file(logs_dir, today)?;

        {
            let mut state = self.lock();
            let previous = state.open.replace(OpenLog {
                file,
                path: path.clone(),
                logs_dir: logs_dir.to_path_buf(),
                date: today,
                threshold,
            });
            if let Some(mut previous) = previous {
                let _ = previous.file.flush();
            }
        }

        self.info(format_args!(
            "Logger initialized - Level: {}, File: {}",
            threshold,
            path.display()
        ));
        Ok(())
    }

    /// Release the log file; logging becomes a no-op until the next `init`
    pub fn close(&self) {
        let open = self.lock().open.take();
        if let Some(mut open) = open {
            let _ = open.file.flush();
        }
    }

    /// Whether a log file is currently open
    pub fn is_initialized(&self) -> bool {
        self.lock().open.is_some()
    }

    /// The configured threshold, if initialized
    pub fn threshold(&self) -> Option<Severity> {
        self.lock().open.as_ref().map(|o| o.threshold)
    }

    /// Path of the file currently written to, if initialized
    pub fn log_path(&self) -> Option<PathBuf> {
        self.lock().open.as_ref().map(|o| o.path.clone())
    }

    /// Register a callback for write failures
    ///
    /// Logging calls still never fail; the hook only observes.
    pub fn set_write_error_hook(&self, hook: impl Fn(&LoggerError) + Send + Sync + 'static) {
        self.lock().hook = Some(Arc::new(hook));
    }

    /// Log an error; errors are never filtered by the threshold
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log_at(Severity::Error, SourceLocation::caller(), args);
    }

    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log_at(Severity::Warn, SourceLocation::caller(), args);
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log_at(Severity::Info, SourceLocation::caller(), args);
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log_at(Severity::Debug, SourceLocation::caller(), args);
    }

    /// Log at a severity chosen at runtime
    #[track_caller]
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.log_at(severity, SourceLocation::caller(), args);
    }

    /// Log with an explicit source location
    pub fn log_at(
        &self,
        severity: Severity,
        location: SourceLocation<'_>,
        args: fmt::Arguments<'_>,
    ) {
        self.emit(severity, &location, args, Local::now());
    }

    fn emit(
        &self,
        severity: Severity,
        location: &SourceLocation<'_>,
        args: fmt::Arguments<'_>,
        now: DateTime<Local>,
    ) {
        let mut failures = Vec::new();

        let hook = {
            let mut guard = self.lock();
            let state = &mut *guard;

            let Some(open) = state.open.as_mut() else {
                return;
            };
            if !severity.passes(open.threshold) {
                return;
            }

            let today = now.date_naive();
            if today != open.date {
                if let Err(e) = open.roll_over(today) {
                    failures.push(e);
                }
            }

            let line = format_line(severity, location, args, &now);

            if let Err(source) = open.file.write_all(line.as_bytes()) {
                failures.push(LoggerError::Write {
                    destination: "log file",
                    source,
                });
            }

            let console = match console_for(severity) {
                Some(Console::Stdout) => Some((&mut state.stdout, "stdout")),
                Some(Console::Stderr) => Some((&mut state.stderr, "stderr")),
                None => None,
            };
            if let Some((writer, destination)) = console {
                let written = writer
                    .write_all(line.as_bytes())
                    .and_then(|_| writer.flush());
                if let Err(source) = written {
                    failures.push(LoggerError::Write {
                        destination,
                        source,
                    });
                }
            }

            state.hook.clone()
        };

        if let Some(hook) = hook {
            for failure in &failures {
                hook(failure);
            }
        }
    }
}

impl Default for BotLogger {
    fn default() -> Self {
        Self::new()
    }
}
