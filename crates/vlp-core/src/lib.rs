//! # vlp-core — Foundational Types for VeilPool
//!
//! This crate is the bedrock of the VeilPool workspace. It defines the
//! type-system primitives every other crate builds on; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Commitment`, `Nullifier`,
//!    `MerkleRoot`, `ReportId`, `Address` — all newtypes. A nullifier cannot
//!    be passed where a commitment is expected; the ledger never confuses
//!    identifier namespaces.
//!
//! 2. **Checked arithmetic only.** `Amount` wraps `u128` and exposes checked
//!    operations plus a truncating `mul_div`. Overflow is an explicit error,
//!    never a silent wrap, and division truncates toward zero so rounding
//!    always favors the pool.
//!
//! 3. **UTC-only timestamps.** `Timestamp` enforces UTC with seconds
//!    precision, so epoch bookkeeping is deterministic across components.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vlp-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod account;
pub mod amount;
pub mod error;
pub mod hash;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use account::Address;
pub use amount::{Amount, AmountError};
pub use error::CoreError;
pub use hash::{Commitment, MerkleRoot, Nullifier, ReportId};
pub use temporal::Timestamp;
