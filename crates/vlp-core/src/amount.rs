//! # Amounts — Unsigned Fixed-Point Integer Arithmetic
//!
//! `Amount` wraps `u128` and is the only numeric type the ledger components
//! use for reserves, shares, fees, yield units, and deposit limits.
//!
//! ## Numeric Policy
//!
//! - All arithmetic is unsigned integer; there is no floating point anywhere
//!   in the workspace.
//! - Division truncates toward zero. Truncation favors the pool: rounding
//!   that could credit a user more than deserved always rounds down.
//! - Overflow and underflow are explicit `AmountError` values. The 128-bit
//!   intermediate product of [`Amount::mul_div`] is checked, not widened —
//!   an operation whose product exceeds `u128::MAX` fails rather than wraps.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Arithmetic failure on an [`Amount`] operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// Addition or multiplication exceeded `u128::MAX`.
    #[error("amount overflow")]
    Overflow,
    /// Subtraction below zero.
    #[error("amount underflow")]
    Underflow,
    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// An unsigned token/share/yield quantity in the asset's smallest unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(pub u128);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Construct from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// The raw `u128` value.
    pub const fn value(&self) -> u128 {
        self.0
    }

    /// Whether this amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    pub fn checked_add(self, rhs: Amount) -> Result<Amount, AmountError> {
        self.0
            .checked_add(rhs.0)
            .map(Amount)
            .ok_or(AmountError::Overflow)
    }

    /// Checked subtraction.
    pub fn checked_sub(self, rhs: Amount) -> Result<Amount, AmountError> {
        self.0
            .checked_sub(rhs.0)
            .map(Amount)
            .ok_or(AmountError::Underflow)
    }

    /// Checked multiplication.
    pub fn checked_mul(self, rhs: Amount) -> Result<Amount, AmountError> {
        self.0
            .checked_mul(rhs.0)
            .map(Amount)
            .ok_or(AmountError::Overflow)
    }

    /// Compute `self * numerator / denominator` with truncating division.
    ///
    /// This is the workhorse of pool accounting: share minting, proportional
    /// payouts, and fee-adjusted invariant checks all reduce to it. The
    /// intermediate product is checked against `u128::MAX`.
    pub fn mul_div(self, numerator: Amount, denominator: Amount) -> Result<Amount, AmountError> {
        if denominator.is_zero() {
            return Err(AmountError::DivisionByZero);
        }
        let product = self
            .0
            .checked_mul(numerator.0)
            .ok_or(AmountError::Overflow)?;
        Ok(Amount(product / denominator.0))
    }

    /// The smaller of two amounts.
    pub fn min(self, rhs: Amount) -> Amount {
        if self.0 <= rhs.0 {
            self
        } else {
            rhs
        }
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Amount(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(value as u128)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
