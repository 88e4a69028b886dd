//! Append-only operation log
//!
//! One line per entry: `YYYY-MM-DD HH:MM:SS [LEVEL] message`, local time.
//! The file is opened, appended to and closed for every entry.

use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Severity of an operation log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render one log line, including the trailing newline.
///
/// Line breaks inside `message` are flattened so an entry never spans lines.
pub fn format_line<Tz>(timestamp: &DateTime<Tz>, level: LogLevel, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let message: String = message
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    format!(
        "{} [{}] {}\n",
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        level,
        message
    )
}

/// Handle on the operation log file
#[derive(Debug, Clone)]
pub struct OpLog {
    path: PathBuf,
}

impl OpLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, reporting I/O failures to the caller
    pub fn append(&self, level: LogLevel, message: &str) -> io::Result<()> {
        let line = format_line(&Local::now(), level, message);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // Single write so concurrent runs interleave whole lines
        file.write_all(line.as_bytes())
    }

    /// Best-effort append: a log that cannot be written never fails the operation
    pub fn record(&self, level: LogLevel, message: &str) {
        if let Err(e) = self.append(level, message) {
            tracing::debug!(path = %self.path.display(), error = %e, "operation log not written");
        }
    }

    pub fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    pub fn error(&self, message: &str) {
        self.record(LogLevel::Error, message);
    }
}
