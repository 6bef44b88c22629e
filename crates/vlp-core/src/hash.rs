//! # Hash Newtypes — Commitments, Nullifiers, Roots, Report Identifiers
//!
//! Newtype wrappers around 32-byte hash values. The ledger never decodes a
//! commitment or nullifier — they are opaque identifiers produced off-ledger
//! by the depositor (or derived deterministically, for report ids). The type
//! distinction prevents cross-namespace substitution: a spent nullifier can
//! never be replayed as a commitment, because the registry APIs will not
//! accept one where the other is expected.
//!
//! All four types render as lowercase hex and parse from 64 hex chars,
//! matching the wire form used by the audit event trail.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Encode 32 bytes as lowercase hex.
pub(crate) fn bytes_to_hex(b: &[u8; 32]) -> String {
    b.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Decode a 64-char hex string to 32 bytes.
pub(crate) fn hex_to_32bytes(hex: &str) -> Result<[u8; 32], CoreError> {
    let hex = hex.trim().to_lowercase();
    if hex.len() != 64 {
        return Err(CoreError::InvalidHex(format!(
            "expected 64 hex chars, got {}",
            hex.len()
        )));
    }
    let mut out = [0u8; 32];
    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let s = std::str::from_utf8(chunk)
            .map_err(|e| CoreError::InvalidHex(format!("invalid hex: {e}")))?;
        out[i] = u8::from_str_radix(s, 16)
            .map_err(|e| CoreError::InvalidHex(format!("invalid hex at byte {i}: {e}")))?;
    }
    Ok(out)
}

/// A deposit commitment: a one-way binding of hidden per-asset amounts and a
/// secret nonce to a public 32-byte hash.
///
/// Registered exactly once, referenced by every later withdrawal, yield, and
/// disclosure operation, never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Commitment(pub [u8; 32]);

/// A withdrawal nullifier: a one-way derivative of a commitment and its
/// secret, published once to prove spending without revealing which
/// commitment was spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Nullifier(pub [u8; 32]);

/// A Merkle root summarizing yield/fee state at a snapshot epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerkleRoot(pub [u8; 32]);

/// Deterministic identifier of a stored tax report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportId(pub [u8; 32]);

impl Commitment {
    /// Access the raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as 64 lowercase hex chars.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Parse from 64 hex chars.
    pub fn from_hex(hex: &str) -> Result<Self, CoreError> {
        Ok(Self(hex_to_32bytes(hex)?))
    }
}

impl Nullifier {
    /// Access the raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as 64 lowercase hex chars.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Parse from 64 hex chars.
    pub fn from_hex(hex: &str) -> Result<Self, CoreError> {
        Ok(Self(hex_to_32bytes(hex)?))
    }
}

impl MerkleRoot {
    /// Access the raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as 64 lowercase hex chars.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Parse from 64 hex chars.
    pub fn from_hex(hex: &str) -> Result<Self, CoreError> {
        Ok(Self(hex_to_32bytes(hex)?))
    }
}

impl ReportId {
    /// Access the raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as 64 lowercase hex chars.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Parse from 64 hex chars.
    pub fn from_hex(hex: &str) -> Result<Self, CoreError> {
        Ok(Self(hex_to_32bytes(hex)?))
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "commitment:{}", self.to_hex())
    }
}

impl std::fmt::Display for Nullifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "nullifier:{}", self.to_hex())
    }
}

impl std::fmt::Display for MerkleRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "root:{}", self.to_hex())
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "report:{}", self.to_hex())
    }
}
