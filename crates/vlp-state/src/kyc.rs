//! # ZK-KYC Tier Registry
//!
//! Maps user addresses to compliance tiers without storing identity data:
//! the registry holds only a commitment to the user's private attributes,
//! the granted tier, and the boolean predicate outcomes the user chose to
//! disclose. Deposit value is debited against the tier's cumulative limit.
//!
//! ## Tiers
//!
//! | Tier          | Requires                                   | Limit       |
//! |---------------|--------------------------------------------|-------------|
//! | Anonymous     | nothing (the unregistered default)         | $10,000     |
//! | Pseudonymous  | age + jurisdiction predicates              | $100,000    |
//! | Institutional | age + jurisdiction + accreditation         | unlimited   |
//!
//! Limits are denominated in the protocol value unit (USD scaled by 1e18)
//! and are lifetime-cumulative, never reset. Re-registering at a new tier
//! keeps the cumulative counter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vlp_core::{Address, Amount, AmountError, Commitment, Timestamp};
use vlp_zkp::ProofVerifier;

use crate::events::KycEvent;
use crate::inputs;

/// Failure of a KYC operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KycError {
    /// Proof verification failed.
    #[error("proof verification failed")]
    ProofRejected,
    /// The disclosed attribute flags do not satisfy the tier's predicate
    /// set.
    #[error("attributes do not satisfy requirements for tier {tier:?}")]
    InsufficientAttributes {
        /// The requested tier.
        tier: KycTier,
    },
    /// The deposit would push the user past their tier's cumulative limit.
    #[error(
        "deposit limit exceeded for tier {tier:?}: limit {limit}, already deposited {cumulative}, requested {value}"
    )]
    DepositLimitExceeded {
        /// The user's tier.
        tier: KycTier,
        /// The tier's cumulative limit.
        limit: Amount,
        /// Value already deposited.
        cumulative: Amount,
        /// Value of the attempted deposit.
        value: Amount,
    },
    /// Value arithmetic failed.
    #[error("kyc arithmetic: {0}")]
    Arithmetic(#[from] AmountError),
}

/// Compliance tier. `Anonymous` is the default for any address that never
/// registered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum KycTier {
    /// No verification. Lowest limit.
    #[default]
    Anonymous = 0,
    /// Age and jurisdiction predicates verified.
    Pseudonymous = 1,
    /// Fully verified accredited participant. No limit.
    Institutional = 2,
}

/// Boolean predicate outcomes disclosed at registration. The underlying
/// attribute values (birth date, jurisdiction code, accreditation papers)
/// stay inside the proof.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycAttributes {
    /// Holder is of legal age.
    pub age_verified: bool,
    /// Holder's jurisdiction is permitted.
    pub jurisdiction_compliant: bool,
    /// Holder is an accredited investor.
    pub accredited_investor: bool,
}

impl KycAttributes {
    /// Whether the flags satisfy `tier`'s predicate set.
    pub fn satisfies(&self, tier: KycTier) -> bool {
        match tier {
            KycTier::Anonymous => true,
            KycTier::Pseudonymous => self.age_verified && self.jurisdiction_compliant,
            KycTier::Institutional => {
                self.age_verified && self.jurisdiction_compliant && self.accredited_investor
            }
        }
    }
}

/// Cumulative deposit limits per tier, in the protocol value unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLimits {
    /// Limit for [`KycTier::Anonymous`].
    pub anonymous: Amount,
    /// Limit for [`KycTier::Pseudonymous`].
    pub pseudonymous: Amount,
    /// Limit for [`KycTier::Institutional`]; `None` means unlimited.
    pub institutional: Option<Amount>,
}

impl Default for TierLimits {
    fn default() -> Self {
        Self {
            anonymous: Amount::new(10_000 * 10u128.pow(18)),
            pseudonymous: Amount::new(100_000 * 10u128.pow(18)),
            institutional: None,
        }
    }
}

impl TierLimits {
    /// The cumulative limit for a tier; `None` means unlimited.
    pub fn limit_for(&self, tier: KycTier) -> Option<Amount> {
        match tier {
            KycTier::Anonymous => Some(self.anonymous),
            KycTier::Pseudonymous => Some(self.pseudonymous),
            KycTier::Institutional => self.institutional,
        }
    }
}

/// A user's registration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycRecord {
    /// Granted tier.
    pub tier: KycTier,
    /// Commitment to the private attribute values.
    pub commitment: Commitment,
    /// Disclosed predicate outcomes.
    pub attributes: KycAttributes,
    /// Ledger time of (re-)registration.
    pub registered_at: Timestamp,
}

/// The tiered deposit-limit component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZkKycRegistry {
    /// Tier limit table, fixed at construction.
    limits: TierLimits,
    /// Registered users. Absence means `Anonymous`.
    users: BTreeMap<Address, KycRecord>,
    /// Lifetime deposited value per address, registered or not.
    deposited: BTreeMap<Address, Amount>,
    /// Append-only audit trail.
    events: Vec<KycEvent>,
}

impl ZkKycRegistry {
    /// Create an empty registry with the given limit table.
    pub fn new(limits: TierLimits) -> Self {
        Self {
            limits,
            users: BTreeMap::new(),
            deposited: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    /// The tier limit table.
    pub fn limits(&self) -> &TierLimits {
        &self.limits
    }

    /// Register (or re-register) a user at `tier` under a proof that the
    /// private attributes back the disclosed flags.
    ///
    /// Re-registration overwrites the record but keeps the cumulative
    /// deposit counter — limits are lifetime counters, not per-tier ones.
    #[allow(clippy::too_many_arguments)]
    pub fn register(
        &mut self,
        verifier: &dyn ProofVerifier,
        user: Address,
        commitment: Commitment,
        tier: KycTier,
        attributes: KycAttributes,
        proof: &[u8],
        now: Timestamp,
    ) -> Result<(), KycError> {
        match verifier.verify(proof, &inputs::kyc_inputs(&user, &commitment, tier, &attributes)) {
            Ok(true) => {}
            Ok(false) | Err(_) => return Err(KycError::ProofRejected),
        }
        if !attributes.satisfies(tier) {
            return Err(KycError::InsufficientAttributes { tier });
        }
        self.users.insert(
            user,
            KycRecord {
                tier,
                commitment,
                attributes,
                registered_at: now,
            },
        );
        self.events.push(KycEvent::KycCommitmentRegistered {
            user,
            tier,
            commitment,
        });
        Ok(())
    }

    /// The user's tier. Unregistered addresses are `Anonymous`.
    pub fn tier_of(&self, user: &Address) -> KycTier {
        self.users.get(user).map(|r| r.tier).unwrap_or_default()
    }

    /// The user's registration record, if any.
    pub fn record(&self, user: &Address) -> Option<&KycRecord> {
        self.users.get(user)
    }

    /// Lifetime deposited value of an address.
    pub fn cumulative_deposited(&self, user: &Address) -> Amount {
        self.deposited.get(user).copied().unwrap_or(Amount::ZERO)
    }

    /// Check that a deposit of `value` (protocol value units) fits within
    /// the user's remaining tier allowance. Read-only.
    pub fn can_deposit(&self, user: &Address, value: Amount) -> Result<(), KycError> {
        let tier = self.tier_of(user);
        let cumulative = self.cumulative_deposited(user);
        let new_total = cumulative.checked_add(value)?;
        if let Some(limit) = self.limits.limit_for(tier) {
            if new_total > limit {
                return Err(KycError::DepositLimitExceeded {
                    tier,
                    limit,
                    cumulative,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Debit a successful deposit against the user's allowance. The caller
    /// must have passed [`Self::can_deposit`] in its validation phase.
    pub fn record_deposit(&mut self, user: Address, value: Amount) -> Result<(), KycError> {
        let cumulative = self.cumulative_deposited(&user).checked_add(value)?;
        self.deposited.insert(user, cumulative);
        self.events.push(KycEvent::DepositRecorded {
            user,
            value,
            cumulative,
        });
        Ok(())
    }

    /// The audit event trail.
    pub fn events(&self) -> &[KycEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vlp_zkp::{PermissiveVerifier, RejectingVerifier};

    const USER: Address = Address([0x01; 20]);

    fn ts() -> Timestamp {
        Timestamp::parse("2026-01-15T12:00:00Z").unwrap()
    }

    fn usd(whole: u128) -> Amount {
        Amount::new(whole * 10u128.pow(18))
    }

    fn full_attrs() -> KycAttributes {
        KycAttributes {
            age_verified: true,
            jurisdiction_compliant: true,
            accredited_investor: true,
        }
    }

    #[test]
    fn test_unregistered_defaults_to_anonymous() {
        let r = ZkKycRegistry::new(TierLimits::default());
        assert_eq!(r.tier_of(&USER), KycTier::Anonymous);
        assert_eq!(r.cumulative_deposited(&USER), Amount::ZERO);
    }

    #[test]
    fn test_anonymous_limit_boundary() {
        let mut r = ZkKycRegistry::new(TierLimits::default());
        r.record_deposit(USER, usd(9_000)).unwrap();
        // Exactly at the limit is allowed.
        r.can_deposit(&USER, usd(1_000)).unwrap();
        // One unit over is not.
        let err = r.can_deposit(&USER, usd(1_001)).unwrap_err();
        assert_eq!(
            err,
            KycError::DepositLimitExceeded {
                tier: KycTier::Anonymous,
                limit: usd(10_000),
                cumulative: usd(9_000),
                value: usd(1_001),
            }
        );
    }

    #[test]
    fn test_register_pseudonymous_raises_limit() {
        let mut r = ZkKycRegistry::new(TierLimits::default());
        r.register(
            &PermissiveVerifier,
            USER,
            Commitment([1u8; 32]),
            KycTier::Pseudonymous,
            KycAttributes {
                age_verified: true,
                jurisdiction_compliant: true,
                accredited_investor: false,
            },
            b"",
            ts(),
        )
        .unwrap();
        assert_eq!(r.tier_of(&USER), KycTier::Pseudonymous);
        r.can_deposit(&USER, usd(50_000)).unwrap();
    }

    #[test]
    fn test_institutional_is_unlimited() {
        let mut r = ZkKycRegistry::new(TierLimits::default());
        r.register(
            &PermissiveVerifier,
            USER,
            Commitment([1u8; 32]),
            KycTier::Institutional,
            full_attrs(),
            b"",
            ts(),
        )
        .unwrap();
        r.can_deposit(&USER, Amount::new(u128::MAX / 2)).unwrap();
    }

    #[test]
    fn test_tier_predicates_enforced() {
        let mut r = ZkKycRegistry::new(TierLimits::default());
        let err = r
            .register(
                &PermissiveVerifier,
                USER,
                Commitment([1u8; 32]),
                KycTier::Institutional,
                KycAttributes {
                    age_verified: true,
                    jurisdiction_compliant: true,
                    accredited_investor: false,
                },
                b"",
                ts(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            KycError::InsufficientAttributes {
                tier: KycTier::Institutional
            }
        );
        assert_eq!(r.tier_of(&USER), KycTier::Anonymous);
    }

    #[test]
    fn test_rejecting_verifier_blocks_registration() {
        let mut r = ZkKycRegistry::new(TierLimits::default());
        let err = r
            .register(
                &RejectingVerifier,
                USER,
                Commitment([1u8; 32]),
                KycTier::Pseudonymous,
                full_attrs(),
                b"",
                ts(),
            )
            .unwrap_err();
        assert_eq!(err, KycError::ProofRejected);
    }

    #[test]
    fn test_reregistration_keeps_cumulative_counter() {
        let mut r = ZkKycRegistry::new(TierLimits::default());
        r.record_deposit(USER, usd(9_999)).unwrap();
        r.register(
            &PermissiveVerifier,
            USER,
            Commitment([2u8; 32]),
            KycTier::Pseudonymous,
            full_attrs(),
            b"",
            ts(),
        )
        .unwrap();
        // The counter carries over; only the headroom changed.
        assert_eq!(r.cumulative_deposited(&USER), usd(9_999));
        r.can_deposit(&USER, usd(90_001)).unwrap();
        assert!(r.can_deposit(&USER, usd(90_002)).is_err());
    }

    #[test]
    fn test_downgrade_reapplies_lower_limit() {
        let mut r = ZkKycRegistry::new(TierLimits::default());
        r.register(
            &PermissiveVerifier,
            USER,
            Commitment([1u8; 32]),
            KycTier::Pseudonymous,
            full_attrs(),
            b"",
            ts(),
        )
        .unwrap();
        r.record_deposit(USER, usd(50_000)).unwrap();
        // Downgrading to anonymous leaves the counter above the new limit:
        // every further deposit is refused.
        r.register(
            &PermissiveVerifier,
            USER,
            Commitment([2u8; 32]),
            KycTier::Anonymous,
            KycAttributes::default(),
            b"",
            ts(),
        )
        .unwrap();
        assert!(r.can_deposit(&USER, Amount::new(1)).is_err());
    }

    #[test]
    fn test_record_deposit_emits_running_total() {
        let mut r = ZkKycRegistry::new(TierLimits::default());
        r.record_deposit(USER, usd(100)).unwrap();
        r.record_deposit(USER, usd(50)).unwrap();
        assert_eq!(
            r.events().last(),
            Some(&KycEvent::DepositRecorded {
                user: USER,
                value: usd(50),
                cumulative: usd(150),
            })
        );
    }
}
