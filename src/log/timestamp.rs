use std::time::{SystemTime, UNIX_EPOCH};

/// Nanoseconds since the Unix epoch.
///
/// A clock set before the epoch yields `0` instead of failing.
#[must_use]
pub fn now_nanos() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
}

/// Decimal string of [`now_nanos`], as printed in every log line.
#[must_use]
pub fn timestamp() -> String {
    now_nanos().to_string()
}
