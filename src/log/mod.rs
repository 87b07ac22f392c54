pub mod assertion;
pub mod log_error;
pub mod log_format;
pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_sink;
pub mod logger;
pub mod timestamp;
pub mod verbosity;
pub use log_sink::NoopLogSink;
