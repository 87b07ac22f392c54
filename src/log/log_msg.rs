use std::fmt;

use crate::log::{log_level::LogLevel, timestamp::now_nanos};

/// Represents a single log record.
///
/// Built and rendered inside one logging call; it is never queued or stored.
/// The [`Display`](fmt::Display) impl produces the exact line written to the
/// sinks, trailing newline included:
///
/// ```text
/// [<timestamp>][<LEVEL>]: <message>
/// [<timestamp>][<LEVEL>][<tag>]: <message>
/// ```
#[derive(Debug, Clone)]
pub struct LogMsg<'a> {
    /// The severity level of the record.
    pub level: LogLevel,
    /// Nanoseconds since the Unix epoch.
    pub ts_ns: u128,
    /// Optional caller-chosen tag.
    pub tag: Option<&'a str>,
    /// The rendered message body.
    pub text: &'a str,
}

impl<'a> LogMsg<'a> {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(level: LogLevel, tag: Option<&'a str>, text: &'a str) -> Self {
        Self::with_timestamp(level, tag, text, now_nanos())
    }

    #[must_use]
    pub fn with_timestamp(
        level: LogLevel,
        tag: Option<&'a str>,
        text: &'a str,
        ts_ns: u128,
    ) -> Self {
        Self {
            level,
            ts_ns,
            tag,
            text,
        }
    }
}

impl fmt::Display for LogMsg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag {
            Some(tag) => writeln!(
                f,
                "[{}][{}][{}]: {}",
                self.ts_ns,
                self.level.name(),
                tag,
                self.text
            ),
            None => writeln!(f, "[{}][{}]: {}", self.ts_ns, self.level.name(), self.text),
        }
    }
}
