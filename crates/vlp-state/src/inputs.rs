//! # Public-Input Encodings
//!
//! Canonical byte encodings of the public inputs for each proof-gated
//! operation. The verifier capability sees only `(proof, public_inputs)`
//! byte strings; these functions fix the encoding so the on-ledger check
//! and the off-ledger prover agree on it.
//!
//! Layout: an ASCII operation tag, then each field in fixed-width
//! big-endian form. No length prefixes are needed because every field is
//! fixed-width.

use vlp_core::{Address, Amount, Commitment, Nullifier, Timestamp};

use crate::kyc::{KycAttributes, KycTier};

fn push_amount(out: &mut Vec<u8>, amount: Amount) {
    out.extend_from_slice(&amount.value().to_be_bytes());
}

fn push_timestamp(out: &mut Vec<u8>, ts: Timestamp) {
    out.extend_from_slice(&ts.epoch_secs().to_be_bytes());
}

/// Public inputs for a deposit proof: the caller knows the opening of
/// `commitment` consistent with the per-asset amounts.
pub fn deposit_inputs(commitment: &Commitment, amount0: Amount, amount1: Amount) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + 32 + 16 + 16);
    out.extend_from_slice(b"VLP_DEP1");
    out.extend_from_slice(commitment.as_bytes());
    push_amount(&mut out, amount0);
    push_amount(&mut out, amount1);
    out
}

/// Public inputs for a withdrawal proof: the caller knows the
/// `(commitment, secret)` pair deriving `nullifier`.
pub fn withdrawal_inputs(
    commitment: &Commitment,
    nullifier: &Nullifier,
    liquidity: Amount,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + 32 + 32 + 16);
    out.extend_from_slice(b"VLP_WDR1");
    out.extend_from_slice(commitment.as_bytes());
    out.extend_from_slice(nullifier.as_bytes());
    push_amount(&mut out, liquidity);
    out
}

/// Public inputs for a yield range disclosure: the yield accrued by
/// `commitment` in `(start, end)` lies within `[min_yield, max_yield]`.
pub fn disclosure_inputs(
    commitment: &Commitment,
    start: Timestamp,
    end: Timestamp,
    min_yield: Amount,
    max_yield: Amount,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + 32 + 8 + 8 + 16 + 16);
    out.extend_from_slice(b"VLP_TAX1");
    out.extend_from_slice(commitment.as_bytes());
    push_timestamp(&mut out, start);
    push_timestamp(&mut out, end);
    push_amount(&mut out, min_yield);
    push_amount(&mut out, max_yield);
    out
}

/// Public inputs for a KYC registration proof: the private attributes
/// satisfy the tier's predicate set, and the disclosed flags are consistent
/// with them.
pub fn kyc_inputs(
    user: &Address,
    commitment: &Commitment,
    tier: KycTier,
    attributes: &KycAttributes,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + 20 + 32 + 4);
    out.extend_from_slice(b"VLP_KYC1");
    out.extend_from_slice(user.as_bytes());
    out.extend_from_slice(commitment.as_bytes());
    out.push(tier as u8);
    out.push(attributes.age_verified as u8);
    out.push(attributes.jurisdiction_compliant as u8);
    out.push(attributes.accredited_investor as u8);
    out
}
