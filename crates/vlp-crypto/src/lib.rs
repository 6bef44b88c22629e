//! # vlp-crypto — Cryptographic Primitives for VeilPool
//!
//! Two concerns live here:
//!
//! - **Commitments** (`commitment.rs`): domain-separated SHA-256 hashes
//!   binding hidden deposit data (a per-asset amount vector plus a 32-byte
//!   secret) to a public commitment, and the one-way nullifier derivation
//!   used to spend it. These are an explicit stand-in for real elliptic-curve
//!   Pedersen commitments — hiding, but not homomorphic. Do not ship them to
//!   a deployment that needs production privacy.
//!
//! - **Merkle trees** (`merkle.rs`): the binary tree behind yield snapshots,
//!   with `0x00`-prefixed leaf hashes and `0x01`-prefixed node hashes so a
//!   leaf can never be reinterpreted as an interior node.
//!
//! ## Crate Policy
//!
//! - Depends only on `vlp-core` internally.
//! - All hashing is SHA-256 (`sha2`); every hash input starts with a domain
//!   tag so digests from different contexts can never collide.

pub mod commitment;
pub mod merkle;

pub use commitment::{deposit_commitment, kyc_commitment, nullifier, withdrawal_nullifier};
pub use merkle::{leaf_hash, node_hash, yield_leaf, MerkleError, MerkleProof, MerkleTree};
