//! # Verifier Configuration
//!
//! `VerifierConfig` is the single switch that decides which `ProofVerifier`
//! a deployment runs. The choice is made when configuration is loaded, not
//! at call time, and the permissive fallback has to be named explicitly —
//! a deployment that believes it requires privacy can grep its config for
//! `permissive` and find nothing.

use serde::{Deserialize, Serialize};

use crate::traits::ProofVerifier;
use crate::verifiers::{PermissiveVerifier, RejectingVerifier, TransparentVerifier};

/// Configuration-time selection of the proof verifier implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifierConfig {
    /// Reject every proof. The safe default.
    #[default]
    Rejecting,
    /// Accept every proof, including empty ones. Fallback mode for
    /// development deployments without a proving stack.
    Permissive,
    /// Deterministic transparent mock (`proof == SHA256(public_inputs)`).
    Transparent,
}

impl VerifierConfig {
    /// Build the configured verifier.
    pub fn build(&self) -> Box<dyn ProofVerifier> {
        match self {
            Self::Rejecting => Box::new(RejectingVerifier),
            Self::Permissive => Box::new(PermissiveVerifier),
            Self::Transparent => Box::new(TransparentVerifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rejecting() {
        assert_eq!(VerifierConfig::default(), VerifierConfig::Rejecting);
        assert!(!VerifierConfig::default().build().verify(b"", b"").unwrap());
    }

    #[test]
    fn test_build_matches_selection() {
        assert!(VerifierConfig::Permissive.build().verify(b"", b"").unwrap());
        let proof = TransparentVerifier::prove(b"x");
        assert!(VerifierConfig::Transparent
            .build()
            .verify(&proof, b"x")
            .unwrap());
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&VerifierConfig::Permissive).unwrap(),
            "\"permissive\""
        );
        let parsed: VerifierConfig = serde_json::from_str("\"transparent\"").unwrap();
        assert_eq!(parsed, VerifierConfig::Transparent);
    }
}
