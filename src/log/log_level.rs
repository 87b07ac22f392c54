use std::{fmt, str::FromStr};

use crate::log::verbosity::level_from_name;

/// ANSI escape that restores the terminal's default attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Defines the severity levels for log messages, least severe first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Fine-grained events that are most useful to debug an application.
    Debug = 0,
    /// Informational messages that highlight the progress of the application.
    Info = 1,
    /// An operation completed as expected.
    Success = 2,
    /// Potentially harmful situations.
    Warn = 3,
    /// Something went wrong but the application can keep going.
    Danger = 4,
    /// Error events.
    Error = 5,
    /// Failed assertions. Written to the log file only, never to the console.
    Assert = 6,
}

impl LogLevel {
    /// All levels in ascending severity.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Success,
        LogLevel::Warn,
        LogLevel::Danger,
        LogLevel::Error,
        LogLevel::Assert,
    ];

    /// Canonical uppercase name, used both in log lines and when parsing.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Success => "SUCCESS",
            LogLevel::Warn => "WARN",
            LogLevel::Danger => "DANGER",
            LogLevel::Error => "ERROR",
            LogLevel::Assert => "ASSERT",
        }
    }

    #[must_use]
    pub const fn index(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Console color for this level, or `None` when the level must not reach
    /// the console at all.
    #[must_use]
    pub const fn console_color(self) -> Option<&'static str> {
        match self {
            LogLevel::Debug => Some("\x1b[36m"),   // cyan
            LogLevel::Info => Some(ANSI_RESET),    // terminal default
            LogLevel::Success => Some("\x1b[32m"), // green
            LogLevel::Warn => Some("\x1b[33m"),    // yellow
            LogLevel::Danger => Some("\x1b[31m"),  // red
            LogLevel::Error => Some("\x1b[41m"),   // red background
            LogLevel::Assert => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names neither a level nor a valid level digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(pub String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown verbosity level: {:?}", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::from_index(level_from_name(s)).ok_or_else(|| ParseLevelError(s.to_owned()))
    }
}
