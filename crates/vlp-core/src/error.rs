//! # Shared Error Types
//!
//! Errors for the foundational type layer. Each ledger component defines its
//! own `thiserror` enum next to its state; this module only covers failures
//! that can occur while constructing or parsing core primitives.

use thiserror::Error;

/// Error constructing or parsing a core primitive.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A hex-encoded value had the wrong length or contained non-hex bytes.
    #[error("invalid hex encoding: {0}")]
    InvalidHex(String),

    /// A timestamp string was malformed or not UTC.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
