//! Log severities and threshold parsing

use std::fmt;

/// Severity of a log message
///
/// Ordered from least to most verbose. A message passes the threshold when
/// its severity is less than or equal to the configured one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error = 0,
    Warn = 1,
    #[default]
    Info = 2,
    Debug = 3,
}

impl Severity {
    /// All severities, least verbose first
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    /// Parse a threshold name, falling back to `Info` for anything unknown
    ///
    /// Names are matched case-sensitively: "error", "warn", "info", "debug".
    pub fn parse(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// Strict variant of [`Severity::parse`] returning `None` for unknown names
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "error" => Some(Severity::Error),
            "warn" => Some(Severity::Warn),
            "info" => Some(Severity::Info),
            "debug" => Some(Severity::Debug),
            _ => None,
        }
    }

    /// Lowercase name, the inverse of [`Severity::parse`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    /// Fixed-width line prefix written before the timestamp
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Error => "[ERROR] ",
            Severity::Warn => "[WARN]  ",
            Severity::Info => "[INFO]  ",
            Severity::Debug => "[DEBUG] ",
        }
    }

    /// Whether a message of this severity passes `threshold`
    ///
    /// Errors always pass.
    pub fn passes(&self, threshold: Severity) -> bool {
        *self == Severity::Error || *self <= threshold
    }

    /// Map a tracing level onto a severity
    ///
    /// `TRACE` has no counterpart and yields `None`.
    pub fn from_tracing(level: &tracing::Level) -> Option<Self> {
        match *level {
            tracing::Level::ERROR => Some(Severity::Error),
            tracing::Level::WARN => Some(Severity::Warn),
            tracing::Level::INFO => Some(Severity::Info),
            tracing::Level::DEBUG => Some(Severity::Debug),
            tracing::Level::TRACE => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Severity::parse(name)
    }
}

impl From<Severity> for tracing::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => tracing::Level::ERROR,
            Severity::Warn => tracing::Level::WARN,
            Severity::Info => tracing::Level::INFO,
            Severity::Debug => tracing::Level::DEBUG,
        }
    }
}
