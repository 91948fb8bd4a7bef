//! JSON serialization for summaries and comparisons.

use serde::Serialize;

/// Serialize a summary or comparison to a compact JSON string.
///
/// Infinite percentages serialize as `null`.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for engine types).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Serialize a summary or comparison to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for engine types).
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
