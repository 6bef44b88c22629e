//! # Selective Yield Disclosure
//!
//! Issues immutable tax reports attesting that a commitment's yield inside a
//! time window lies within a disclosed `[min, max]` range, without revealing
//! the exact figure.
//!
//! The component checks the commitment's registration, the window, the
//! bounds, and the proof — and nothing else. It never re-derives the yield
//! figure: the truth of the disclosed range is entirely the proof's claim,
//! which is the trust boundary of the whole disclosure feature. Each report
//! records whether its proof was actually checked: under the permissive
//! fallback verifier the `verified` flag stays `false`, so a reader can tell
//! an attested disclosure from an unverified one.
//!
//! One report is created per successful disclosure call. The identifier is
//! a hash over the range fields plus the caller and the ledger time, so
//! repeating the same disclosure in a later call yields a fresh report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use vlp_core::{Address, Amount, Commitment, ReportId, Timestamp};
use vlp_zkp::ProofVerifier;

use crate::events::DisclosureEvent;
use crate::inputs;
use crate::registry::CommitmentRegistry;

/// Failure of a disclosure operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisclosureError {
    /// Proof verification failed.
    #[error("proof verification failed")]
    ProofRejected,
    /// The commitment is not registered.
    #[error("unknown commitment: {0}")]
    UnknownCommitment(Commitment),
    /// The window has `start >= end`.
    #[error("invalid time range: start must precede end")]
    InvalidRange,
    /// The disclosed bounds have `min > max`.
    #[error("invalid bounds: min exceeds max")]
    InvalidBounds,
}

/// An immutable range-disclosure report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxReport {
    /// Deterministic identifier over the report's fields.
    pub report_id: ReportId,
    /// The disclosed commitment.
    pub commitment: Commitment,
    /// Window start (exclusive).
    pub start_time: Timestamp,
    /// Window end (exclusive).
    pub end_time: Timestamp,
    /// Disclosed lower bound, inclusive.
    pub min_yield: Amount,
    /// Disclosed upper bound, inclusive.
    pub max_yield: Amount,
    /// Whether the gating verifier actually attests proofs. `false` under
    /// the permissive fallback.
    pub verified: bool,
    /// Ledger time of generation.
    pub generated_at: Timestamp,
}

/// Deterministic report identifier: a hash over the range fields, the
/// caller, and the ledger time of the call.
fn report_id(
    commitment: &Commitment,
    start: Timestamp,
    end: Timestamp,
    min_yield: Amount,
    max_yield: Amount,
    caller: Address,
    now: Timestamp,
) -> ReportId {
    let mut hasher = Sha256::new();
    hasher.update(b"VEILPOOL_REPORT_V1");
    hasher.update(commitment.as_bytes());
    hasher.update(start.epoch_secs().to_be_bytes());
    hasher.update(end.epoch_secs().to_be_bytes());
    hasher.update(min_yield.value().to_be_bytes());
    hasher.update(max_yield.value().to_be_bytes());
    hasher.update(caller.as_bytes());
    hasher.update(now.epoch_secs().to_be_bytes());
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    ReportId(out)
}

/// The report-issuing component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectiveDisclosure {
    /// Issued reports, keyed by identifier. Never mutated after insertion.
    reports: BTreeMap<ReportId, TaxReport>,
    /// Append-only audit trail.
    events: Vec<DisclosureEvent>,
}

impl SelectiveDisclosure {
    /// Create a component with no reports.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a range-disclosure report for `commitment` over the open
    /// window `(start, end)`. Returns the new report's identifier.
    ///
    /// Exact disclosure is the degenerate case `min_yield == max_yield`.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_report(
        &mut self,
        verifier: &dyn ProofVerifier,
        registry: &CommitmentRegistry,
        caller: Address,
        commitment: Commitment,
        start: Timestamp,
        end: Timestamp,
        min_yield: Amount,
        max_yield: Amount,
        proof: &[u8],
        now: Timestamp,
    ) -> Result<ReportId, DisclosureError> {
        match verifier.verify(
            proof,
            &inputs::disclosure_inputs(&commitment, start, end, min_yield, max_yield),
        ) {
            Ok(true) => {}
            Ok(false) | Err(_) => return Err(DisclosureError::ProofRejected),
        }
        if !registry.is_registered(&commitment) {
            return Err(DisclosureError::UnknownCommitment(commitment));
        }
        if start >= end {
            return Err(DisclosureError::InvalidRange);
        }
        if min_yield > max_yield {
            return Err(DisclosureError::InvalidBounds);
        }

        let id = report_id(&commitment, start, end, min_yield, max_yield, caller, now);
        let verified = verifier.attests();
        self.reports.insert(
            id,
            TaxReport {
                report_id: id,
                commitment,
                start_time: start,
                end_time: end,
                min_yield,
                max_yield,
                verified,
                generated_at: now,
            },
        );
        self.events.push(DisclosureEvent::TaxReportGenerated {
            report_id: id,
            commitment,
            start_time: start,
            end_time: end,
            verified,
        });
        Ok(id)
    }

    /// Look up an issued report.
    pub fn report(&self, id: &ReportId) -> Option<&TaxReport> {
        self.reports.get(id)
    }

    /// All issued reports in identifier order.
    pub fn reports(&self) -> impl Iterator<Item = &TaxReport> {
        self.reports.values()
    }

    /// The audit event trail.
    pub fn events(&self) -> &[DisclosureEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vlp_zkp::{PermissiveVerifier, RejectingVerifier, TransparentVerifier};

    const AUTHORITY: Address = Address([0xAA; 20]);
    const POOL: Address = Address([0xF0; 20]);
    const ALICE: Address = Address([0x01; 20]);
    const BOB: Address = Address([0x02; 20]);

    fn ts(secs: i64) -> Timestamp {
        Timestamp::from_epoch_secs(1_760_000_000 + secs).unwrap()
    }

    /// A registry with one registered commitment.
    fn registry_with_commitment() -> (CommitmentRegistry, Commitment) {
        let mut registry = CommitmentRegistry::new(AUTHORITY);
        registry.bind_pool(AUTHORITY, POOL).unwrap();
        let c = Commitment([1u8; 32]);
        registry
            .register_commitment(POOL, c, Amount::new(100), ts(0))
            .unwrap();
        (registry, c)
    }

    #[test]
    fn test_report_is_issued_and_immutable() {
        let (registry, c) = registry_with_commitment();
        let mut d = SelectiveDisclosure::new();
        let id = d
            .generate_report(
                &PermissiveVerifier,
                &registry,
                ALICE,
                c,
                ts(0),
                ts(200),
                Amount::ZERO,
                Amount::new(500),
                b"",
                ts(300),
            )
            .unwrap();
        let report = d.report(&id).unwrap();
        assert_eq!(report.commitment, c);
        assert_eq!(report.min_yield, Amount::ZERO);
        assert_eq!(report.max_yield, Amount::new(500));
        assert_eq!(
            d.events(),
            &[DisclosureEvent::TaxReportGenerated {
                report_id: id,
                commitment: c,
                start_time: ts(0),
                end_time: ts(200),
                verified: false,
            }]
        );
    }

    #[test]
    fn test_exact_disclosure_degenerate_case() {
        let (registry, c) = registry_with_commitment();
        let mut d = SelectiveDisclosure::new();
        // min == max is a legal exact disclosure.
        d.generate_report(
            &PermissiveVerifier,
            &registry,
            ALICE,
            c,
            ts(0),
            ts(200),
            Amount::new(42),
            Amount::new(42),
            b"",
            ts(300),
        )
        .unwrap();
    }

    #[test]
    fn test_repeated_disclosure_issues_fresh_report() {
        let (registry, c) = registry_with_commitment();
        let mut d = SelectiveDisclosure::new();
        let first = d
            .generate_report(
                &PermissiveVerifier,
                &registry,
                ALICE,
                c,
                ts(0),
                ts(200),
                Amount::ZERO,
                Amount::new(500),
                b"",
                ts(300),
            )
            .unwrap();
        // Same range fields, later ledger time: a new report per call.
        let second = d
            .generate_report(
                &PermissiveVerifier,
                &registry,
                ALICE,
                c,
                ts(0),
                ts(200),
                Amount::ZERO,
                Amount::new(500),
                b"",
                ts(400),
            )
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(d.reports().count(), 2);
    }

    #[test]
    fn test_report_id_distinguishes_callers() {
        let (registry, c) = registry_with_commitment();
        let mut d = SelectiveDisclosure::new();
        let a = d
            .generate_report(
                &PermissiveVerifier,
                &registry,
                ALICE,
                c,
                ts(0),
                ts(200),
                Amount::ZERO,
                Amount::new(500),
                b"",
                ts(300),
            )
            .unwrap();
        let b = d
            .generate_report(
                &PermissiveVerifier,
                &registry,
                BOB,
                c,
                ts(0),
                ts(200),
                Amount::ZERO,
                Amount::new(500),
                b"",
                ts(300),
            )
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verified_flag_tracks_verifier_attestation() {
        let (registry, c) = registry_with_commitment();
        let mut d = SelectiveDisclosure::new();
        let unverified = d
            .generate_report(
                &PermissiveVerifier,
                &registry,
                ALICE,
                c,
                ts(0),
                ts(200),
                Amount::ZERO,
                Amount::new(500),
                b"",
                ts(300),
            )
            .unwrap();
        assert!(!d.report(&unverified).unwrap().verified);

        let public_inputs =
            inputs::disclosure_inputs(&c, ts(0), ts(200), Amount::ZERO, Amount::new(500));
        let proof = TransparentVerifier::prove(&public_inputs);
        let attested = d
            .generate_report(
                &TransparentVerifier,
                &registry,
                ALICE,
                c,
                ts(0),
                ts(200),
                Amount::ZERO,
                Amount::new(500),
                &proof,
                ts(301),
            )
            .unwrap();
        assert!(d.report(&attested).unwrap().verified);
    }

    #[test]
    fn test_unregistered_commitment_rejected() {
        let (registry, _) = registry_with_commitment();
        let mut d = SelectiveDisclosure::new();
        let missing = Commitment([9u8; 32]);
        let err = d
            .generate_report(
                &PermissiveVerifier,
                &registry,
                ALICE,
                missing,
                ts(0),
                ts(200),
                Amount::ZERO,
                Amount::ZERO,
                b"",
                ts(300),
            )
            .unwrap_err();
        assert_eq!(err, DisclosureError::UnknownCommitment(missing));
    }

    #[test]
    fn test_inverted_window_and_bounds_rejected() {
        let (registry, c) = registry_with_commitment();
        let mut d = SelectiveDisclosure::new();
        assert_eq!(
            d.generate_report(
                &PermissiveVerifier,
                &registry,
                ALICE,
                c,
                ts(200),
                ts(100),
                Amount::ZERO,
                Amount::new(1),
                b"",
                ts(300),
            )
            .unwrap_err(),
            DisclosureError::InvalidRange
        );
        assert_eq!(
            d.generate_report(
                &PermissiveVerifier,
                &registry,
                ALICE,
                c,
                ts(0),
                ts(200),
                Amount::new(2),
                Amount::new(1),
                b"",
                ts(300),
            )
            .unwrap_err(),
            DisclosureError::InvalidBounds
        );
    }

    #[test]
    fn test_rejecting_verifier_blocks_report() {
        let (registry, c) = registry_with_commitment();
        let mut d = SelectiveDisclosure::new();
        let err = d
            .generate_report(
                &RejectingVerifier,
                &registry,
                ALICE,
                c,
                ts(0),
                ts(200),
                Amount::ZERO,
                Amount::new(1),
                b"",
                ts(300),
            )
            .unwrap_err();
        assert_eq!(err, DisclosureError::ProofRejected);
    }

    #[test]
    fn test_report_id_is_deterministic_over_fields() {
        let c = Commitment([1u8; 32]);
        let a = report_id(&c, ts(0), ts(100), Amount::ZERO, Amount::new(5), ALICE, ts(200));
        let b = report_id(&c, ts(0), ts(100), Amount::ZERO, Amount::new(5), ALICE, ts(200));
        assert_eq!(a, b);
        assert_ne!(
            a,
            report_id(&c, ts(0), ts(100), Amount::ZERO, Amount::new(5), ALICE, ts(201))
        );
        assert_ne!(
            a,
            report_id(&c, ts(0), ts(100), Amount::ZERO, Amount::new(5), BOB, ts(200))
        );
    }
}
