//! # vlp-state — The VeilPool Ledger State Machine
//!
//! Five components composed as a pipeline, driven by external calls arriving
//! one at a time from the host ledger:
//!
//! - **`registry`** (leaf): authoritative set of registered commitments and
//!   spent nullifiers. Single writer; mutations are gated to the bound pool
//!   address.
//! - **`pool`**: two-asset reserves, liquidity share mint/burn, and the swap
//!   primitive whose 0.3% fee remainder is the source of all yield.
//! - **`accumulator`**: Merkle-snapshotted yield state and per-commitment
//!   accrual against the pool's cumulative fee counters.
//! - **`disclosure`**: proof-gated [min, max] yield range disclosure issuing
//!   immutable tax reports.
//! - **`kyc`**: tiered deposit limits consulted before deposits and debited
//!   as a side effect of successful ones.
//!
//! Supporting modules: `token` (the in-memory asset transfer interface),
//! `events` (typed append-only audit records), `inputs` (canonical
//! public-input encodings for the proof gate), `config` (static
//! configuration), and `protocol` (the serialized one-call-at-a-time
//! execution harness standing in for the host ledger).
//!
//! ## Atomicity Discipline
//!
//! The host ledger applies each top-level call to completion and rolls the
//! whole call back on failure. This crate reproduces that guarantee without
//! a rollback mechanism by ordering every operation as
//! *validate-everything, then write*: no state mutation happens until every
//! fallible check (proof verification, duplicate detection, balance and
//! limit checks, checked arithmetic on the prospective new state) has
//! passed. A failed operation therefore never leaves a partially-updated
//! component.

pub mod accumulator;
pub mod config;
pub mod disclosure;
pub mod events;
pub mod inputs;
pub mod kyc;
pub mod pool;
pub mod protocol;
pub mod registry;
pub mod token;

pub use accumulator::{AccrualRecord, YieldAccumulator, YieldError, YieldRecord, YieldSnapshot};
pub use config::{AssetValuation, PoolConfig, ProtocolConfig, TokenConfig};
pub use disclosure::{DisclosureError, SelectiveDisclosure, TaxReport};
pub use events::{DisclosureEvent, KycEvent, PoolEvent, RegistryEvent, YieldEvent};
pub use kyc::{KycAttributes, KycError, KycRecord, KycTier, TierLimits, ZkKycRegistry};
pub use pool::{PoolError, PrivateLiquidityPool};
pub use protocol::{Protocol, ProtocolError};
pub use registry::{CommitmentRecord, CommitmentRegistry, RegistryError};
pub use token::{Token, TokenError};
