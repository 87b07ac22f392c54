use std::{fmt, io};

/// Usage and I/O errors reported by the logger.
///
/// Records dropped for being below the threshold are not errors.
#[derive(Debug)]
pub enum LogError {
    /// An output file is already open; close it before opening another one.
    FileAlreadyInitialized,
    /// A threshold was neither a known level name, a single digit, nor a
    /// non-negative index.
    InvalidVerbosity(String),
    /// A record was written before `init()` or any `set_verbosity*` call.
    Uninitialized,
    /// Opening, writing or flushing a sink failed.
    Io(io::Error),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LogError::*;
        match self {
            FileAlreadyInitialized => write!(f, "log file has already been initialized"),
            InvalidVerbosity(v) => write!(f, "invalid verbosity level: {v:?}"),
            Uninitialized => write!(
                f,
                "verbosity level is not set, or init() has not been called"
            ),
            Io(e) => write!(f, "log I/O error: {e}"),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LogError {
    fn from(e: io::Error) -> Self {
        LogError::Io(e)
    }
}
