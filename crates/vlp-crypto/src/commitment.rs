//! # Hash Commitments and Nullifiers
//!
//! A deposit commitment binds the per-asset amount vector and a 32-byte
//! secret to a public hash. The amounts are committed individually — never
//! pre-summed into one scalar — so the commitment does not leak a relation
//! between the two asset legs.
//!
//! Derivations:
//!
//! - Commitment: `SHA256(COMMITMENT_TAG || n || amount_0 || ... || secret)`
//!   with `n` as a big-endian u32 count and each amount as 16 big-endian
//!   bytes.
//! - Nullifier: `SHA256(NULLIFIER_TAG || commitment || secret || purpose)`.
//!   The purpose tag scopes a nullifier to one operation kind; withdrawal
//!   uses `b"withdrawal"`.
//! - KYC commitment: `SHA256(KYC_TAG || age || jurisdiction || accredited)`.
//!
//! These hash constructions are a placeholder for curve-based Pedersen
//! commitments. They hide the opening (preimage resistance) but provide no
//! algebraic structure; the proof layer treats them as opaque either way.

use sha2::{Digest, Sha256};

use vlp_core::{Amount, Commitment, Nullifier};

/// Domain tag for deposit commitments.
const COMMITMENT_TAG: &[u8] = b"VEILPOOL_COMMITMENT_V1";

/// Domain tag for nullifier derivation.
const NULLIFIER_TAG: &[u8] = b"VEILPOOL_NULLIFIER_V1";

/// Domain tag for KYC attribute commitments.
const KYC_TAG: &[u8] = b"VEILPOOL_KYC_V1";

/// Purpose tag scoping a nullifier to a withdrawal.
pub const PURPOSE_WITHDRAWAL: &[u8] = b"withdrawal";

fn sha256_array(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Compute a deposit commitment over a per-asset amount vector and secret.
pub fn deposit_commitment(amounts: &[Amount], secret: &[u8; 32]) -> Commitment {
    let mut hasher = Sha256::new();
    hasher.update(COMMITMENT_TAG);
    hasher.update((amounts.len() as u32).to_be_bytes());
    for amount in amounts {
        hasher.update(amount.value().to_be_bytes());
    }
    hasher.update(secret);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    Commitment(out)
}

/// Derive a nullifier from a commitment, its secret, and a purpose tag.
pub fn nullifier(commitment: &Commitment, secret: &[u8; 32], purpose: &[u8]) -> Nullifier {
    Nullifier(sha256_array(&[
        NULLIFIER_TAG,
        commitment.as_bytes(),
        secret,
        purpose,
    ]))
}

/// Derive the withdrawal nullifier for a commitment.
pub fn withdrawal_nullifier(commitment: &Commitment, secret: &[u8; 32]) -> Nullifier {
    nullifier(commitment, secret, PURPOSE_WITHDRAWAL)
}

/// Compute a KYC commitment over private identity attributes.
///
/// `jurisdiction` is the two-letter ISO country code as raw bytes.
pub fn kyc_commitment(age: u8, jurisdiction: [u8; 2], accredited_investor: bool) -> Commitment {
    Commitment(sha256_array(&[
        KYC_TAG,
        &[age],
        &jurisdiction,
        &[accredited_investor as u8],
    ]))
}
