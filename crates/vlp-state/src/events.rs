//! # Audit Events
//!
//! Every state-mutating operation appends a typed record to its component's
//! event log. The logs are public, append-only audit trails keyed by
//! commitment / nullifier / report identifiers — the on-ledger equivalent of
//! contract events, replayed here as in-memory vectors.
//!
//! Note the privacy boundary: the `NullifierUsed` record links a nullifier
//! to its commitment for pool/registry auditability, but that link is not
//! derivable externally from the nullifier alone.

use serde::{Deserialize, Serialize};

use vlp_core::{Address, Amount, Commitment, MerkleRoot, Nullifier, ReportId, Timestamp};

use crate::kyc::KycTier;

/// Events emitted by the commitment registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A commitment was registered with its credited shares.
    CommitmentRegistered {
        /// The registered commitment.
        commitment: Commitment,
        /// Shares credited at registration.
        shares: Amount,
        /// Ledger time of registration.
        timestamp: Timestamp,
    },
    /// A nullifier was consumed for a withdrawal.
    NullifierUsed {
        /// The spent nullifier.
        nullifier: Nullifier,
        /// The commitment it spends against (registry-visible link).
        commitment: Commitment,
    },
}

/// Events emitted by the liquidity pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolEvent {
    /// Liquidity deposited under a commitment.
    Deposit {
        /// The deposit commitment.
        commitment: Commitment,
        /// Liquidity shares minted.
        liquidity: Amount,
        /// Asset 0 amount pulled.
        amount0: Amount,
        /// Asset 1 amount pulled.
        amount1: Amount,
    },
    /// Liquidity withdrawn against a nullifier.
    Withdrawal {
        /// The consumed nullifier.
        nullifier: Nullifier,
        /// Liquidity shares burned.
        liquidity: Amount,
        /// Asset 0 amount paid out.
        amount0: Amount,
        /// Asset 1 amount paid out.
        amount1: Amount,
    },
    /// A swap against the reserves.
    Swap {
        /// The swapping caller.
        caller: Address,
        /// Asset 0 input.
        amount0_in: Amount,
        /// Asset 1 input.
        amount1_in: Amount,
        /// Asset 0 output.
        amount0_out: Amount,
        /// Asset 1 output.
        amount1_out: Amount,
        /// Output recipient.
        to: Address,
    },
}

/// Events emitted by the yield accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum YieldEvent {
    /// A new yield snapshot root was published.
    MerkleRootUpdated {
        /// The published root.
        root: MerkleRoot,
        /// Snapshot epoch timestamp.
        epoch: Timestamp,
    },
    /// Yield was accrued for a commitment.
    YieldAccrued {
        /// The accruing commitment.
        commitment: Commitment,
        /// Newly accrued yield units.
        amount: Amount,
        /// Ledger time of accrual.
        timestamp: Timestamp,
    },
}

/// Events emitted by the selective disclosure component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisclosureEvent {
    /// A tax report was generated and stored.
    TaxReportGenerated {
        /// Deterministic report identifier.
        report_id: ReportId,
        /// The disclosed commitment.
        commitment: Commitment,
        /// Window start.
        start_time: Timestamp,
        /// Window end.
        end_time: Timestamp,
        /// Whether the gating verifier actually attests proofs.
        verified: bool,
    },
}

/// Events emitted by the KYC registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KycEvent {
    /// A KYC commitment was registered or overwritten for a user.
    KycCommitmentRegistered {
        /// The registering user.
        user: Address,
        /// The granted tier.
        tier: KycTier,
        /// The KYC attribute commitment.
        commitment: Commitment,
    },
    /// A deposit was debited against a user's tier limit.
    DepositRecorded {
        /// The depositing user.
        user: Address,
        /// Deposit value in the protocol value unit.
        value: Amount,
        /// New cumulative deposited value.
        cumulative: Amount,
    },
}
