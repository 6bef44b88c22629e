//! # Commitment Registry
//!
//! The authoritative set of registered commitments and spent nullifiers.
//! This is the leaf of the component graph: the pool writes to it, the
//! yield accumulator and disclosure component read from it, and it depends
//! on nothing.
//!
//! ## State Machine (per commitment)
//!
//! ```text
//! Unregistered ──register_commitment()──▶ Registered ──use_nullifier()──▶ (nullifier spent)
//! ```
//!
//! There is no transition back to `Unregistered`. A fully-withdrawn
//! commitment is never deleted; only its nullifiers are marked spent, and
//! each nullifier is tracked independently, so one commitment can be drawn
//! down across several withdrawal calls.
//!
//! ## Capability Gating
//!
//! Mutations are accepted only from the bound pool address. The binding is
//! a one-shot operation by the deployment authority (the `setPoolAddress`
//! step of the wiring flow). Any other caller gets an authorization error —
//! which signals misconfiguration or attack, never a user mistake.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vlp_core::{Address, Amount, Commitment, Nullifier, Timestamp};

use crate::events::RegistryEvent;

/// Failure of a registry operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller is not the deployment authority.
    #[error("caller {caller} is not the registry authority")]
    NotAuthority {
        /// The rejected caller.
        caller: Address,
    },
    /// The pool address was already bound.
    #[error("pool address already bound")]
    PoolAlreadyBound,
    /// No pool address has been bound yet.
    #[error("no pool address bound")]
    PoolNotBound,
    /// Caller is not the bound pool.
    #[error("caller {caller} is not the bound pool")]
    OnlyPool {
        /// The rejected caller.
        caller: Address,
    },
    /// The commitment is already registered (double-registration attempt).
    #[error("commitment already registered: {0}")]
    DuplicateCommitment(Commitment),
    /// The nullifier was already spent (double-spend attempt).
    #[error("nullifier already used: {0}")]
    NullifierAlreadyUsed(Nullifier),
    /// The commitment is not registered.
    #[error("unknown commitment: {0}")]
    UnknownCommitment(Commitment),
}

/// The shares credited to a commitment at registration. Immutable once
/// written — commitments register exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentRecord {
    /// Liquidity shares credited at registration time.
    pub shares: Amount,
    /// Ledger time of registration.
    pub registered_at: Timestamp,
}

/// The commitment/nullifier bookkeeping component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitmentRegistry {
    /// Deployment authority allowed to bind the pool address.
    authority: Address,
    /// The bound pool address, once set.
    pool: Option<Address>,
    /// Registered commitments and their share records.
    commitments: BTreeMap<Commitment, CommitmentRecord>,
    /// Spent nullifiers with their registry-visible commitment link.
    nullifiers: BTreeMap<Nullifier, Commitment>,
    /// Append-only audit trail.
    events: Vec<RegistryEvent>,
}

impl CommitmentRegistry {
    /// Create a registry owned by `authority`, with no pool bound.
    pub fn new(authority: Address) -> Self {
        Self {
            authority,
            pool: None,
            commitments: BTreeMap::new(),
            nullifiers: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    /// Bind the pool address. Authority-only, succeeds exactly once.
    pub fn bind_pool(&mut self, caller: Address, pool: Address) -> Result<(), RegistryError> {
        if caller != self.authority {
            return Err(RegistryError::NotAuthority { caller });
        }
        if self.pool.is_some() {
            return Err(RegistryError::PoolAlreadyBound);
        }
        self.pool = Some(pool);
        Ok(())
    }

    fn require_pool(&self, caller: Address) -> Result<(), RegistryError> {
        match self.pool {
            None => Err(RegistryError::PoolNotBound),
            Some(pool) if pool == caller => Ok(()),
            Some(_) => Err(RegistryError::OnlyPool { caller }),
        }
    }

    /// Register a commitment with its credited shares. Pool-only.
    ///
    /// Fails if the commitment is already registered; a commitment
    /// registers at most once, ever.
    pub fn register_commitment(
        &mut self,
        caller: Address,
        commitment: Commitment,
        shares: Amount,
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        self.require_pool(caller)?;
        if self.commitments.contains_key(&commitment) {
            return Err(RegistryError::DuplicateCommitment(commitment));
        }
        self.commitments.insert(
            commitment,
            CommitmentRecord {
                shares,
                registered_at: now,
            },
        );
        self.events.push(RegistryEvent::CommitmentRegistered {
            commitment,
            shares,
            timestamp: now,
        });
        Ok(())
    }

    /// Mark a nullifier spent against a registered commitment. Pool-only.
    ///
    /// Fails if the nullifier was already used — each nullifier is consumed
    /// at most once, ever, across all commitments.
    pub fn use_nullifier(
        &mut self,
        caller: Address,
        nullifier: Nullifier,
        commitment: Commitment,
    ) -> Result<(), RegistryError> {
        self.require_pool(caller)?;
        if !self.commitments.contains_key(&commitment) {
            return Err(RegistryError::UnknownCommitment(commitment));
        }
        if self.nullifiers.contains_key(&nullifier) {
            return Err(RegistryError::NullifierAlreadyUsed(nullifier));
        }
        self.nullifiers.insert(nullifier, commitment);
        self.events.push(RegistryEvent::NullifierUsed {
            nullifier,
            commitment,
        });
        Ok(())
    }

    /// Whether a commitment is registered.
    pub fn is_registered(&self, commitment: &Commitment) -> bool {
        self.commitments.contains_key(commitment)
    }

    /// The registration record for a commitment, if registered.
    pub fn record(&self, commitment: &Commitment) -> Option<&CommitmentRecord> {
        self.commitments.get(commitment)
    }

    /// Shares credited to a commitment at registration.
    pub fn shares_of(&self, commitment: &Commitment) -> Option<Amount> {
        self.commitments.get(commitment).map(|r| r.shares)
    }

    /// Whether a nullifier has been spent.
    pub fn is_nullifier_used(&self, nullifier: &Nullifier) -> bool {
        self.nullifiers.contains_key(nullifier)
    }

    /// Registered commitments in deterministic order.
    pub fn commitments(&self) -> impl Iterator<Item = (&Commitment, &CommitmentRecord)> {
        self.commitments.iter()
    }

    /// The audit event trail.
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }
}
