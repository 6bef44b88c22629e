//! # vlp-zkp — Proof Verification Capability
//!
//! All four proof-consuming operations (deposit, withdrawal, disclosure, KYC
//! registration) treat proofs as opaque byte strings and delegate to one
//! `ProofVerifier` capability chosen at configuration time. This crate never
//! inspects proof internals.
//!
//! ## Architecture
//!
//! - **Traits** (`traits.rs`): the `ProofVerifier` trait — the compile-time
//!   contract that keeps fallback, stub, and real implementations
//!   interchangeable.
//!
//! - **Verifiers** (`verifiers.rs`): three implementations:
//!   - `PermissiveVerifier` — fallback mode, accepts everything. Only for
//!     deployments that have explicitly opted out of proof checking.
//!   - `RejectingVerifier` — rejects everything; forces every test through
//!     the verification-failed path.
//!   - `TransparentVerifier` — deterministic mock: a proof is valid iff it
//!     equals `SHA256(public_inputs)`. No zero-knowledge privacy, but real
//!     pass/fail behavior for exercising the full call path.
//!
//! - **Config** (`config.rs`): `VerifierConfig` selects the implementation.
//!   Selection is data-driven configuration, never runtime string sniffing,
//!   and the permissive fallback must be chosen explicitly.
//!
//! ## Real Backends (Feature-Gated)
//!
//! Adapters for real proving stacks (SP1, Groth16) slot in behind feature
//! flags as further `ProofVerifier` implementations; see `Cargo.toml`.

pub mod config;
pub mod traits;
pub mod verifiers;

pub use config::VerifierConfig;
pub use traits::{ProofVerifier, VerifyError};
pub use verifiers::{PermissiveVerifier, RejectingVerifier, TransparentVerifier};
