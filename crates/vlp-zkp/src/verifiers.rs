//! # Verifier Implementations
//!
//! Three `ProofVerifier` implementations covering the non-production space:
//! the permissive fallback, the rejecting stub, and the transparent
//! deterministic mock. Real proving-stack adapters are feature-gated
//! extension points (see crate `Cargo.toml`).

use sha2::{Digest, Sha256};

use crate::traits::{ProofVerifier, VerifyError};

/// Fallback-mode verifier: accepts every proof, including the empty one.
///
/// This reproduces the reference deployment's behavior when no verifier is
/// configured. It provides **no privacy guarantees whatsoever** and must
/// only ever be reachable through an explicit [`crate::VerifierConfig`]
/// choice — never as a silent default.
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissiveVerifier;

impl ProofVerifier for PermissiveVerifier {
    fn verify(&self, _proof: &[u8], _public_inputs: &[u8]) -> Result<bool, VerifyError> {
        Ok(true)
    }

    fn attests(&self) -> bool {
        false
    }
}

/// Rejecting stub: every proof fails verification.
///
/// Useful for forcing an entire test suite through the proof-failure path,
/// and as the safe default when configuration is absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectingVerifier;

impl ProofVerifier for RejectingVerifier {
    fn verify(&self, _proof: &[u8], _public_inputs: &[u8]) -> Result<bool, VerifyError> {
        Ok(false)
    }
}

/// Transparent mock verifier: a proof is valid iff it is exactly
/// `SHA256(public_inputs)`.
///
/// Deterministic and stateless, with real pass/fail behavior, so tests can
/// exercise both outcomes of the verification gate. Provides no
/// zero-knowledge privacy — anyone can produce a "proof" from the public
/// inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransparentVerifier;

impl TransparentVerifier {
    /// Produce the proof bytes this verifier will accept for the given
    /// public inputs. The prover-side counterpart of `verify`.
    pub fn prove(public_inputs: &[u8]) -> Vec<u8> {
        Sha256::digest(public_inputs).to_vec()
    }
}

impl ProofVerifier for TransparentVerifier {
    fn verify(&self, proof: &[u8], public_inputs: &[u8]) -> Result<bool, VerifyError> {
        if proof.len() != 32 {
            return Err(VerifyError::MalformedProof(format!(
                "expected 32 proof bytes, got {}",
                proof.len()
            )));
        }
        Ok(proof == Sha256::digest(public_inputs).as_slice())
    }
}
