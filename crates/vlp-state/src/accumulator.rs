//! # Yield Accumulator
//!
//! Tracks per-commitment yield accrued from the pool's swap fees and
//! publishes Merkle snapshots binding every commitment to its accrued total.
//!
//! ## Accrual Model
//!
//! The pool exposes monotonic cumulative fee counters per asset. An accrual
//! call normalizes those counters into the protocol value unit via the
//! static [`AssetValuation`] table, computes the commitment's pro-rata
//! entitlement `fee_value · shares / total_supply`, and credits the delta
//! over what the commitment already claimed. A commitment whose entitlement
//! has not grown since its last accrual gets the distinguished
//! [`YieldError::NoFeesAccumulated`] error, so callers can tell "nothing new
//! to claim" apart from "no such commitment".
//!
//! Share supply growth between accruals can shrink a commitment's pro-rata
//! entitlement below what it already claimed; that case also reads as
//! `NoFeesAccumulated`, and the claimed mark is never lowered.
//!
//! ## Snapshots
//!
//! The authority periodically publishes the root of a Merkle tree whose
//! leaves are `yield_leaf(commitment, total_accrued)` in commitment order.
//! Each published root is appended with its epoch timestamp; history is
//! never rewritten.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vlp_core::{Address, Amount, AmountError, Commitment, MerkleRoot, Timestamp};
use vlp_crypto::{yield_leaf, MerkleProof, MerkleTree};

use crate::config::AssetValuation;
use crate::events::YieldEvent;
use crate::pool::PrivateLiquidityPool;
use crate::registry::CommitmentRegistry;

/// Failure of a yield operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YieldError {
    /// Caller is not the snapshot authority.
    #[error("caller {caller} is not the yield authority")]
    NotAuthority {
        /// The rejected caller.
        caller: Address,
    },
    /// The commitment is not registered.
    #[error("unknown commitment: {0}")]
    UnknownCommitment(Commitment),
    /// The pool has no outstanding liquidity to prorate against.
    #[error("no liquidity shares outstanding")]
    ZeroShares,
    /// The commitment's entitlement has not grown since its last accrual.
    #[error("no new fees accumulated for commitment")]
    NoFeesAccumulated,
    /// A snapshot of an empty registry.
    #[error("cannot snapshot an empty commitment set")]
    EmptySnapshot,
    /// A disclosure window with `start >= end`.
    #[error("invalid time range: start must precede end")]
    InvalidRange,
    /// Yield arithmetic failed.
    #[error("yield arithmetic: {0}")]
    Arithmetic(#[from] AmountError),
}

/// A published Merkle snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldSnapshot {
    /// Root over all `(commitment, total_accrued)` leaves.
    pub root: MerkleRoot,
    /// Ledger time of publication.
    pub epoch: Timestamp,
}

/// One accrual credited to a commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualRecord {
    /// Newly credited yield, in the protocol value unit.
    pub amount: Amount,
    /// Ledger time of the accrual.
    pub timestamp: Timestamp,
}

/// Per-commitment yield state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldRecord {
    /// Lifetime accrued yield, in the protocol value unit.
    pub total_accrued: Amount,
    /// High-water mark of the pro-rata entitlement already credited.
    pub claimed_entitlement: Amount,
    /// Individual accruals, in time order.
    pub accruals: Vec<AccrualRecord>,
}

/// The Merkle-snapshotted yield component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldAccumulator {
    /// Authority allowed to publish snapshots.
    authority: Address,
    /// Static valuation table normalizing the two fee counters.
    valuation: AssetValuation,
    /// Published snapshot history, in publication order.
    snapshots: Vec<YieldSnapshot>,
    /// Per-commitment accrual state.
    records: BTreeMap<Commitment, YieldRecord>,
    /// Append-only audit trail.
    events: Vec<YieldEvent>,
}

impl YieldAccumulator {
    /// Create an accumulator owned by `authority`.
    pub fn new(authority: Address, valuation: AssetValuation) -> Self {
        Self {
            authority,
            valuation,
            snapshots: Vec::new(),
            records: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    /// Accrue any new pro-rata fee entitlement to `commitment`. Returns the
    /// newly credited amount (always nonzero on success).
    pub fn accrue_yield(
        &mut self,
        registry: &CommitmentRegistry,
        pool: &PrivateLiquidityPool,
        commitment: Commitment,
        now: Timestamp,
    ) -> Result<Amount, YieldError> {
        let shares = registry
            .shares_of(&commitment)
            .ok_or(YieldError::UnknownCommitment(commitment))?;
        let total_supply = pool.total_supply();
        if total_supply.is_zero() {
            return Err(YieldError::ZeroShares);
        }

        let (fee0, fee1) = pool.cumulative_fees();
        let fee_value = self.valuation.value_of(fee0, fee1)?;
        let entitlement = fee_value.mul_div(shares, total_supply)?;

        let claimed = self
            .records
            .get(&commitment)
            .map(|r| r.claimed_entitlement)
            .unwrap_or(Amount::ZERO);
        if entitlement <= claimed {
            return Err(YieldError::NoFeesAccumulated);
        }
        let delta = entitlement.checked_sub(claimed)?;

        let record = self.records.entry(commitment).or_default();
        record.total_accrued = record.total_accrued.checked_add(delta)?;
        record.claimed_entitlement = entitlement;
        record.accruals.push(AccrualRecord {
            amount: delta,
            timestamp: now,
        });
        self.events.push(YieldEvent::YieldAccrued {
            commitment,
            amount: delta,
            timestamp: now,
        });
        Ok(delta)
    }

    /// Lifetime accrued yield of a commitment (zero when never accrued).
    pub fn yield_of(&self, commitment: &Commitment) -> Amount {
        self.records
            .get(commitment)
            .map(|r| r.total_accrued)
            .unwrap_or(Amount::ZERO)
    }

    /// The full accrual record of a commitment, if any.
    pub fn record(&self, commitment: &Commitment) -> Option<&YieldRecord> {
        self.records.get(commitment)
    }

    /// Yield accrued strictly inside the open window `(start, end)`.
    /// Accruals exactly at either boundary are excluded.
    pub fn yield_in_range(
        &self,
        commitment: &Commitment,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Amount, YieldError> {
        if start >= end {
            return Err(YieldError::InvalidRange);
        }
        let mut total = Amount::ZERO;
        if let Some(record) = self.records.get(commitment) {
            for accrual in &record.accruals {
                if accrual.timestamp > start && accrual.timestamp < end {
                    total = total.checked_add(accrual.amount)?;
                }
            }
        }
        Ok(total)
    }

    /// Publish a caller-supplied snapshot root. Authority-only. This is the
    /// raw privileged operation; [`Self::publish_snapshot`] computes the
    /// root from the current records and delegates here.
    pub fn update_merkle_root(
        &mut self,
        caller: Address,
        root: MerkleRoot,
        now: Timestamp,
    ) -> Result<(), YieldError> {
        if caller != self.authority {
            return Err(YieldError::NotAuthority { caller });
        }
        self.snapshots.push(YieldSnapshot { root, epoch: now });
        self.events.push(YieldEvent::MerkleRootUpdated { root, epoch: now });
        Ok(())
    }

    /// Publish a Merkle snapshot of every accrual record. Authority-only.
    /// Returns the published root.
    pub fn publish_snapshot(
        &mut self,
        caller: Address,
        now: Timestamp,
    ) -> Result<MerkleRoot, YieldError> {
        if caller != self.authority {
            return Err(YieldError::NotAuthority { caller });
        }
        let leaves = self.current_leaves();
        if leaves.is_empty() {
            return Err(YieldError::EmptySnapshot);
        }
        // Nonempty leaves: build cannot fail.
        let root = MerkleTree::build(&leaves)
            .map(|tree| tree.root())
            .map_err(|_| YieldError::EmptySnapshot)?;
        self.update_merkle_root(caller, root, now)?;
        Ok(root)
    }

    /// Inclusion proof for a commitment's current accrual leaf, with the
    /// root it verifies against. The proof matches the latest published
    /// snapshot only if no accrual happened since publication.
    pub fn proof_for(&self, commitment: &Commitment) -> Result<(MerkleProof, MerkleRoot), YieldError> {
        let index = self
            .records
            .keys()
            .position(|c| c == commitment)
            .ok_or(YieldError::UnknownCommitment(*commitment))?;
        let leaves = self.current_leaves();
        let tree = MerkleTree::build(&leaves).map_err(|_| YieldError::EmptySnapshot)?;
        let proof = tree.proof(index).map_err(|_| YieldError::EmptySnapshot)?;
        Ok((proof, tree.root()))
    }

    /// The latest published root, if any snapshot exists.
    pub fn latest_root(&self) -> Option<MerkleRoot> {
        self.snapshots.last().map(|s| s.root)
    }

    /// Published snapshot history in publication order.
    pub fn snapshots(&self) -> &[YieldSnapshot] {
        &self.snapshots
    }

    /// The audit event trail.
    pub fn events(&self) -> &[YieldEvent] {
        &self.events
    }

    /// Raw leaf contents in commitment order, one per accrual record.
    fn current_leaves(&self) -> Vec<[u8; 32]> {
        self.records
            .iter()
            .map(|(commitment, record)| yield_leaf(commitment, record.total_accrued))
            .collect()
    }
}
