//! Assertions that leave a trace in the log file before failing.

use std::fmt;

use crate::log::{log_level::LogLevel, log_sink::LogSink, timestamp::timestamp};

/// Expressions that mark code that should never run, e.g. `log_assert!(false)`.
const UNREACHABLE_EXPRESSIONS: [&str; 3] = ["false", "0", "FALSE"];

/// A failed [`check`], carrying everything needed to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    /// The asserted expression as written in the source.
    pub expression: String,
    /// Source file of the assertion.
    pub file: String,
    /// Source line of the assertion.
    pub line: u32,
    /// Caller-supplied description, possibly empty.
    pub message: String,
    /// Nanosecond timestamp taken after the log file was closed.
    pub timestamp: String,
    /// Full report: the logged diagnostic followed by `, Timestamp <ns>`.
    pub report: String,
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report)
    }
}

impl std::error::Error for AssertionFailure {}

/// Checks `condition`; on failure logs a diagnostic and returns it.
///
/// The diagnostic reads
/// `<message> \n Assertion '<expression>' failed in file '<file>', line <line>`,
/// with the message part omitted when empty and the assertion part replaced by
/// `Unreachable code assertion` for `false`-like expressions.
///
/// It is logged at [`LogLevel::Assert`] (file only, still subject to the
/// threshold), then the sink's log file is closed so the record is on disk
/// before the caller unwinds. A sink that cannot log (for instance an
/// uninitialized logger) does not hide the failure.
pub fn check<S: LogSink + ?Sized>(
    sink: &S,
    condition: bool,
    expression: &str,
    file: &str,
    line: u32,
    message: &str,
) -> Result<(), AssertionFailure> {
    if condition {
        return Ok(());
    }

    let diagnostic = diagnostic(expression, file, line, message);
    let _ = sink.log_line(LogLevel::Assert, None, &diagnostic);
    sink.close();

    let timestamp = timestamp();
    let report = format!("{diagnostic}, Timestamp {timestamp}");
    Err(AssertionFailure {
        expression: expression.to_owned(),
        file: file.to_owned(),
        line,
        message: message.to_owned(),
        timestamp,
        report,
    })
}

fn diagnostic(expression: &str, file: &str, line: u32, message: &str) -> String {
    let mut out = String::new();
    if !message.is_empty() {
        out.push_str(message);
        out.push_str(" \n ");
    }

    if UNREACHABLE_EXPRESSIONS.contains(&expression) {
        out.push_str("Unreachable code assertion");
    } else {
        out.push_str("Assertion '");
        out.push_str(expression);
        out.push('\'');
    }

    out.push_str(&format!(" failed in file '{file}', line {line}"));
    out
}
