//! # Static Configuration
//!
//! Everything a deployment fixes at initialization and never mutates
//! afterwards: the swap fee fraction, the asset valuation table, the KYC
//! tier limits, token metadata, and the verifier selection. None of this is
//! part of the core state machine — components receive their slice of it at
//! construction.

use serde::{Deserialize, Serialize};

use vlp_core::{Address, Amount, AmountError};
use vlp_zkp::VerifierConfig;

use crate::kyc::TierLimits;

/// Swap fee configuration. The reference fraction is 997/1000 (0.3%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Fee numerator applied to swap inputs (997 in the reference).
    pub fee_numerator: Amount,
    /// Fee denominator (1000 in the reference).
    pub fee_denominator: Amount,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            fee_numerator: Amount::new(997),
            fee_denominator: Amount::new(1000),
        }
    }
}

/// Fixed per-unit valuations for the two pooled assets, in the protocol's
/// value unit (USD scaled by 1e18, matching the tier limit table).
///
/// There is no price oracle: these are static configuration. The same table
/// normalizes deposit values for KYC limit accounting and fee amounts into
/// the single yield unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetValuation {
    /// Value of one smallest unit of asset 0.
    /// For a 6-decimal $1 stablecoin: 1e12.
    pub unit_value0: Amount,
    /// Value of one smallest unit of asset 1.
    /// For an 18-decimal asset priced at $2500: 2500.
    pub unit_value1: Amount,
}

impl Default for AssetValuation {
    fn default() -> Self {
        Self {
            unit_value0: Amount::new(1_000_000_000_000),
            unit_value1: Amount::new(2500),
        }
    }
}

impl AssetValuation {
    /// Normalize a pair of raw asset amounts into one value-unit amount.
    pub fn value_of(&self, amount0: Amount, amount1: Amount) -> Result<Amount, AmountError> {
        amount0
            .checked_mul(self.unit_value0)?
            .checked_add(amount1.checked_mul(self.unit_value1)?)
    }
}

/// Token metadata for one of the two pooled assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Ticker symbol, e.g. `USDC`.
    pub symbol: String,
    /// Decimal places of the smallest unit.
    pub decimals: u8,
}

/// Full deployment configuration for the [`crate::Protocol`] harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// Proof verifier selection. Defaults to rejecting — fallback mode must
    /// be chosen explicitly.
    pub verifier: VerifierConfig,
    /// Swap fee fraction.
    pub pool: PoolConfig,
    /// Fixed asset valuations.
    pub valuation: AssetValuation,
    /// KYC tier deposit limits.
    pub tier_limits: TierLimits,
    /// Asset 0 metadata.
    pub token0: TokenConfig,
    /// Asset 1 metadata.
    pub token1: TokenConfig,
    /// The pool's custody address, bound into the registries at wiring time.
    pub pool_address: Address,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            verifier: VerifierConfig::default(),
            pool: PoolConfig::default(),
            valuation: AssetValuation::default(),
            tier_limits: TierLimits::default(),
            token0: TokenConfig {
                symbol: "USDC".to_string(),
                decimals: 6,
            },
            token1: TokenConfig {
                symbol: "WETH".to_string(),
                decimals: 18,
            },
            pool_address: Address([0xF0; 20]),
        }
    }
}
