//! # Account Addresses
//!
//! `Address` is the 20-byte account identifier used for every caller-facing
//! surface: share balances, token balances, KYC records, and capability
//! gating (the registry only accepts mutations from the bound pool address).
//!
//! Addresses are opaque to the core — there is no key-recovery or signature
//! scheme here; the host ledger authenticates callers before the operation
//! reaches this state machine.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A 20-byte account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; 20]);

    /// Access the raw 20 bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Render as 40 lowercase hex chars with `0x` prefix.
    pub fn to_hex(&self) -> String {
        let hex: String = self.0.iter().map(|b| format!("{b:02x}")).collect();
        format!("0x{hex}")
    }

    /// Parse from 40 hex chars, with or without a `0x` prefix.
    pub fn from_hex(hex: &str) -> Result<Self, CoreError> {
        let hex = hex.trim().to_lowercase();
        let hex = hex.strip_prefix("0x").unwrap_or(&hex);
        if hex.len() != 40 {
            return Err(CoreError::InvalidHex(format!(
                "expected 40 hex chars for address, got {}",
                hex.len()
            )));
        }
        let mut out = [0u8; 20];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let s = std::str::from_utf8(chunk)
                .map_err(|e| CoreError::InvalidHex(format!("invalid hex: {e}")))?;
            out[i] = u8::from_str_radix(s, 16)
                .map_err(|e| CoreError::InvalidHex(format!("invalid hex at byte {i}: {e}")))?;
        }
        Ok(Self(out))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
