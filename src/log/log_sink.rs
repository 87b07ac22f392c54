use crate::log::{log_error::LogError, log_level::LogLevel};

/// Something that accepts already-rendered messages.
///
/// Implemented by [`Logger`](crate::log::logger::Logger); the assertion path
/// only needs this much of it.
pub trait LogSink: Send + Sync {
    /// Wraps `msg` into a record line and writes it, subject to the threshold.
    fn log_line(&self, level: LogLevel, tag: Option<&str>, msg: &str) -> Result<(), LogError>;

    /// Flushes and closes any file output.
    fn close(&self);
}

/// Discards everything.
#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn log_line(&self, _level: LogLevel, _tag: Option<&str>, _msg: &str) -> Result<(), LogError> {
        Ok(())
    }

    #[inline]
    fn close(&self) {}
}
