//! Mapping between level names and threshold values.
//!
//! Thresholds are plain `i32`s: `-1` means "not initialized", anything else
//! is compared against [`LogLevel::index`](crate::log::log_level::LogLevel::index).

use crate::log::log_level::LogLevel;

/// Threshold value of a logger that was never initialized.
pub const UNINITIALIZED: i32 = -1;

/// Threshold used when neither an explicit value nor an override is given.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

/// Resolves a level name to its index.
///
/// Matching is case-sensitive against the canonical names (`"DEBUG"`,
/// `"INFO"`, ...). A single ASCII digit is accepted as a literal index.
/// Anything else yields [`UNINITIALIZED`].
#[must_use]
pub fn level_from_name(name: &str) -> i32 {
    if let Some(level) = LogLevel::ALL.iter().find(|l| l.name() == name) {
        return level.index();
    }

    match name.as_bytes() {
        [d] if d.is_ascii_digit() => i32::from(d - b'0'),
        _ => UNINITIALIZED,
    }
}

/// Picks the initial threshold.
///
/// A `current` value that is already set wins. Otherwise a non-empty
/// `override_name` is resolved with [`level_from_name`], and if that still
/// gives nothing the threshold falls back to [`DEFAULT_LEVEL`].
#[must_use]
pub fn resolve_initial_threshold(current: i32, override_name: Option<&str>) -> i32 {
    if current >= 0 {
        return current;
    }

    let resolved = override_name
        .filter(|s| !s.is_empty())
        .map_or(UNINITIALIZED, level_from_name);

    if resolved < 0 {
        DEFAULT_LEVEL.index()
    } else {
        resolved
    }
}
