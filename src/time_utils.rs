// SPDX-License-Identifier: MIT

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format an epoch-seconds timestamp as an ISO-8601 string with millisecond
/// precision and a `Z` suffix.
pub fn epoch_seconds_to_iso8601(seconds: i64) -> String {
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_zero() {
        assert_eq!(epoch_seconds_to_iso8601(0), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_epoch_seconds() {
        assert_eq!(
            epoch_seconds_to_iso8601(1_700_000_000),
            "2023-11-14T22:13:20.000Z"
        );
    }
}
