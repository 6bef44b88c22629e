//! # Temporal Types — UTC-Only Ledger Time
//!
//! Defines `Timestamp`, the UTC-only, seconds-precision instant used for
//! registration records, yield snapshot epochs, and disclosure windows.
//!
//! The host ledger supplies block time as whole epoch seconds; sub-second
//! precision and local offsets would make snapshot windows ambiguous across
//! components, so both are rejected at construction.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A UTC-only timestamp, truncated to seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// From a Unix epoch timestamp in seconds.
    pub fn from_epoch_secs(secs: i64) -> Result<Self, CoreError> {
        let dt = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| CoreError::InvalidTimestamp(format!("invalid epoch seconds: {secs}")))?;
        Ok(Self(dt))
    }

    /// Parse from an RFC 3339 string. Only the `Z` suffix is accepted —
    /// explicit offsets (even `+00:00`) are rejected so that rendered
    /// timestamps are byte-deterministic.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if !s.ends_with('Z') {
            return Err(CoreError::InvalidTimestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| CoreError::InvalidTimestamp(format!("invalid RFC 3339 {s:?}: {e}")))?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// The Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// This timestamp advanced by `secs` seconds.
    pub fn plus_secs(&self, secs: i64) -> Result<Self, CoreError> {
        Self::from_epoch_secs(
            self.epoch_secs()
                .checked_add(secs)
                .ok_or_else(|| CoreError::InvalidTimestamp("epoch overflow".to_string()))?,
        )
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
