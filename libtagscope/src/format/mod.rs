//! Human-readable data formatting utilities.
//!
//! This module provides functions for formatting manifest record fields like
//! byte sizes, timestamps and digests into user-friendly strings.

use chrono::{DateTime, Utc};
use chrono_humanize::Humanize;
use humansize::{BINARY, format_size as format_size_human};

#[cfg(test)]
mod tests;

/// Formats a byte size into a human-readable string using binary units (KiB, MiB).
///
/// # Examples
///
/// ```
/// use libtagscope::format::format_size;
///
/// let size = 1024 * 1024 * 5; // 5 MiB
/// assert_eq!(format_size(size), "5 MiB");
/// ```
pub fn format_size(size_bytes: u64) -> String {
    format_size_human(size_bytes, BINARY)
}

/// Formats a timestamp into a human-readable relative string.
///
/// # Examples
///
/// ```
/// use libtagscope::format::format_timestamp;
/// use chrono::{Duration, Utc};
///
/// let one_day_ago = Utc::now() - Duration::days(1);
/// assert_eq!(format_timestamp(&one_day_ago), "a day ago");
/// ```
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.humanize()
}

/// Formats an optional timestamp, using `-` when it is unset.
pub fn format_optional_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .as_ref()
        .map(format_timestamp)
        .unwrap_or_else(|| "-".to_string())
}

/// Shortens a digest to its algorithm and first 12 hex characters.
///
/// Strings that are not in `<algo>:<hex>` form are returned unchanged.
///
/// # Examples
///
/// ```
/// use libtagscope::format::short_digest;
///
/// assert_eq!(
///     short_digest("sha256:7173b809ca12ec5dee4506cd86be934c4596dd234ee82c0662eac04a8c2c71dc"),
///     "sha256:7173b809ca12"
/// );
/// assert_eq!(short_digest("sha256:abc"), "sha256:abc");
/// ```
pub fn short_digest(digest: &str) -> String {
    match digest.split_once(':') {
        Some((algorithm, hex)) if hex.len() > 12 && hex.is_char_boundary(12) => {
            format!("{}:{}", algorithm, &hex[..12])
        }
        _ => digest.to_string(),
    }
}
