//! # Proof Verifier Trait
//!
//! Defines the abstract interface for proof verification. All
//! implementations (permissive fallback, rejecting stub, transparent mock,
//! real backends) must satisfy this trait.
//!
//! Verification is a pure function of the proof and public-input bytes: no
//! side effects, no state. The `Send + Sync` bounds let a verifier handle be
//! shared across an embedding application.

use thiserror::Error;

/// Error during proof verification.
///
/// A verifier that runs to completion and finds the proof invalid returns
/// `Ok(false)`, not an error. Errors mean the verifier itself could not
/// produce an answer; the ledger components map both outcomes onto the same
/// "verification failed" operation abort.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The proof bytes are structurally malformed for this verifier.
    #[error("malformed proof: {0}")]
    MalformedProof(String),
    /// The verifier backend is unreachable or misconfigured.
    #[error("verifier unavailable: {0}")]
    Unavailable(String),
}

/// Abstract interface for verifying an opaque proof against its public
/// inputs.
pub trait ProofVerifier: Send + Sync {
    /// Verify a proof. Returns `Ok(true)` when the proof attests the claim
    /// encoded in `public_inputs`.
    fn verify(&self, proof: &[u8], public_inputs: &[u8]) -> Result<bool, VerifyError>;

    /// Whether a passing `verify` actually attests the claim. The permissive
    /// fallback returns `false`: it accepts every proof without checking, so
    /// records gated by it must not be marked verified.
    fn attests(&self) -> bool {
        true
    }
}
