//! # Protocol Harness
//!
//! Owns every component plus the two asset ledgers and executes external
//! calls one at a time, standing in for the host ledger's serialized
//! transaction model. There is no interleaving: each method runs to
//! completion before the next call is accepted, and each component keeps
//! the validate-then-write discipline, so a failed call leaves the whole
//! protocol state untouched.
//!
//! The harness also wires the deposit path through the KYC registry: the
//! deposit's normalized value is checked against the caller's tier
//! allowance before the pool moves anything, and debited only after the
//! pool call succeeds.

use thiserror::Error;
use tracing::{debug, info};

use vlp_core::{Address, Amount, AmountError, Commitment, MerkleRoot, Nullifier, ReportId, Timestamp};
use vlp_zkp::ProofVerifier;

use crate::accumulator::{YieldAccumulator, YieldError};
use crate::config::ProtocolConfig;
use crate::disclosure::{DisclosureError, SelectiveDisclosure, TaxReport};
use crate::kyc::{KycAttributes, KycError, KycTier, ZkKycRegistry};
use crate::pool::{PoolError, PrivateLiquidityPool};
use crate::registry::{CommitmentRegistry, RegistryError};
use crate::token::{Token, TokenError};

/// Failure of a protocol call, carrying the failing component's error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The pool rejected the call.
    #[error("pool: {0}")]
    Pool(#[from] PoolError),
    /// The commitment registry rejected the call.
    #[error("registry: {0}")]
    Registry(#[from] RegistryError),
    /// The yield accumulator rejected the call.
    #[error("yield: {0}")]
    Yield(#[from] YieldError),
    /// The disclosure component rejected the call.
    #[error("disclosure: {0}")]
    Disclosure(#[from] DisclosureError),
    /// The KYC registry rejected the call.
    #[error("kyc: {0}")]
    Kyc(#[from] KycError),
    /// A token ledger rejected the call.
    #[error("token: {0}")]
    Token(#[from] TokenError),
    /// Value arithmetic failed.
    #[error("arithmetic: {0}")]
    Arithmetic(#[from] AmountError),
}

/// The fully wired protocol instance.
pub struct Protocol {
    config: ProtocolConfig,
    authority: Address,
    verifier: Box<dyn ProofVerifier>,
    registry: CommitmentRegistry,
    pool: PrivateLiquidityPool,
    accumulator: YieldAccumulator,
    disclosure: SelectiveDisclosure,
    kyc: ZkKycRegistry,
    token0: Token,
    token1: Token,
}

impl Protocol {
    /// Construct and wire a protocol instance: components are created from
    /// their config slices and the pool address is bound into the
    /// commitment registry (the one-shot deployment step).
    pub fn new(authority: Address, config: ProtocolConfig) -> Result<Self, ProtocolError> {
        let verifier = config.verifier.build();
        let mut registry = CommitmentRegistry::new(authority);
        registry.bind_pool(authority, config.pool_address)?;
        let pool = PrivateLiquidityPool::new(config.pool_address, config.pool);
        let accumulator = YieldAccumulator::new(authority, config.valuation);
        let kyc = ZkKycRegistry::new(config.tier_limits);
        let token0 = Token::new(config.token0.symbol.clone(), config.token0.decimals);
        let token1 = Token::new(config.token1.symbol.clone(), config.token1.decimals);
        info!(
            verifier = ?config.verifier,
            pool = %config.pool_address,
            token0 = %token0.symbol(),
            token1 = %token1.symbol(),
            "protocol wired"
        );
        Ok(Self {
            config,
            authority,
            verifier,
            registry,
            pool,
            accumulator,
            disclosure: SelectiveDisclosure::new(),
            kyc,
            token0,
            token1,
        })
    }

    /// The deployment configuration.
    pub fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    /// The deployment authority address.
    pub fn authority(&self) -> Address {
        self.authority
    }

    // ─── Setup ──────────────────────────────────────────────────────────

    /// Mint asset 0 to an account (test/deployment fixture path).
    pub fn mint_token0(&mut self, to: Address, amount: Amount) -> Result<(), ProtocolError> {
        self.token0.mint(to, amount)?;
        Ok(())
    }

    /// Mint asset 1 to an account (test/deployment fixture path).
    pub fn mint_token1(&mut self, to: Address, amount: Amount) -> Result<(), ProtocolError> {
        self.token1.mint(to, amount)?;
        Ok(())
    }

    // ─── Liquidity ──────────────────────────────────────────────────────

    /// Deposit both assets under a commitment. Checks the caller's KYC
    /// allowance on the normalized deposit value, runs the pool deposit,
    /// then debits the allowance. Returns the minted liquidity.
    #[allow(clippy::too_many_arguments)]
    pub fn deposit(
        &mut self,
        caller: Address,
        commitment: Commitment,
        amount0: Amount,
        amount1: Amount,
        proof: &[u8],
        now: Timestamp,
    ) -> Result<Amount, ProtocolError> {
        let value = self.config.valuation.value_of(amount0, amount1)?;
        self.kyc.can_deposit(&caller, value)?;
        let liquidity = self.pool.deposit(
            &mut self.registry,
            &mut self.token0,
            &mut self.token1,
            self.verifier.as_ref(),
            caller,
            commitment,
            amount0,
            amount1,
            proof,
            now,
        )?;
        // can_deposit proved the same checked_add cannot fail here.
        self.kyc.record_deposit(caller, value)?;
        debug!(%commitment, %liquidity, %value, "deposit accepted");
        Ok(liquidity)
    }

    /// Withdraw liquidity against a fresh nullifier. Returns the amounts
    /// paid `(amount0, amount1)`.
    pub fn withdraw(
        &mut self,
        caller: Address,
        commitment: Commitment,
        nullifier: Nullifier,
        liquidity: Amount,
        proof: &[u8],
    ) -> Result<(Amount, Amount), ProtocolError> {
        let paid = self.pool.withdraw(
            &mut self.registry,
            &mut self.token0,
            &mut self.token1,
            self.verifier.as_ref(),
            caller,
            commitment,
            nullifier,
            liquidity,
            proof,
        )?;
        debug!(%nullifier, %liquidity, "withdrawal accepted");
        Ok(paid)
    }

    /// Swap against the pool reserves.
    #[allow(clippy::too_many_arguments)]
    pub fn swap(
        &mut self,
        caller: Address,
        amount0_in: Amount,
        amount1_in: Amount,
        amount0_out: Amount,
        amount1_out: Amount,
        to: Address,
    ) -> Result<(), ProtocolError> {
        self.pool.swap(
            &mut self.token0,
            &mut self.token1,
            caller,
            amount0_in,
            amount1_in,
            amount0_out,
            amount1_out,
            to,
        )?;
        Ok(())
    }

    /// Quote the single-sided swap output for `amount_in` of asset 0
    /// against the current reserves.
    pub fn quote_swap0(&self, amount_in: Amount) -> Result<Amount, ProtocolError> {
        let (r0, r1) = self.pool.reserves();
        Ok(self.pool.quote_output(amount_in, r0, r1)?)
    }

    // ─── Yield ──────────────────────────────────────────────────────────

    /// Accrue new fee entitlement to a commitment. Returns the credited
    /// amount.
    pub fn accrue_yield(
        &mut self,
        commitment: Commitment,
        now: Timestamp,
    ) -> Result<Amount, ProtocolError> {
        let credited = self
            .accumulator
            .accrue_yield(&self.registry, &self.pool, commitment, now)?;
        debug!(%commitment, %credited, "yield accrued");
        Ok(credited)
    }

    /// Publish a Merkle snapshot of all accrual records. Authority-only.
    pub fn publish_snapshot(
        &mut self,
        caller: Address,
        now: Timestamp,
    ) -> Result<MerkleRoot, ProtocolError> {
        let root = self.accumulator.publish_snapshot(caller, now)?;
        info!(%root, "yield snapshot published");
        Ok(root)
    }

    // ─── Disclosure ─────────────────────────────────────────────────────

    /// Generate a yield range-disclosure report.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_report(
        &mut self,
        caller: Address,
        commitment: Commitment,
        start: Timestamp,
        end: Timestamp,
        min_yield: Amount,
        max_yield: Amount,
        proof: &[u8],
        now: Timestamp,
    ) -> Result<ReportId, ProtocolError> {
        let id = self.disclosure.generate_report(
            self.verifier.as_ref(),
            &self.registry,
            caller,
            commitment,
            start,
            end,
            min_yield,
            max_yield,
            proof,
            now,
        )?;
        info!(report = %id, %commitment, "tax report generated");
        Ok(id)
    }

    /// Look up an issued tax report.
    pub fn report(&self, id: &ReportId) -> Option<&TaxReport> {
        self.disclosure.report(id)
    }

    // ─── KYC ────────────────────────────────────────────────────────────

    /// Register a user's KYC commitment at a tier.
    #[allow(clippy::too_many_arguments)]
    pub fn register_kyc(
        &mut self,
        user: Address,
        commitment: Commitment,
        tier: KycTier,
        attributes: KycAttributes,
        proof: &[u8],
        now: Timestamp,
    ) -> Result<(), ProtocolError> {
        self.kyc.register(
            self.verifier.as_ref(),
            user,
            commitment,
            tier,
            attributes,
            proof,
            now,
        )?;
        info!(%user, ?tier, "kyc registered");
        Ok(())
    }

    // ─── Read-only component access ─────────────────────────────────────

    /// The commitment registry.
    pub fn registry(&self) -> &CommitmentRegistry {
        &self.registry
    }

    /// The liquidity pool.
    pub fn pool(&self) -> &PrivateLiquidityPool {
        &self.pool
    }

    /// The yield accumulator.
    pub fn accumulator(&self) -> &YieldAccumulator {
        &self.accumulator
    }

    /// The disclosure component.
    pub fn disclosure(&self) -> &SelectiveDisclosure {
        &self.disclosure
    }

    /// The KYC registry.
    pub fn kyc(&self) -> &ZkKycRegistry {
        &self.kyc
    }

    /// Asset 0 ledger.
    pub fn token0(&self) -> &Token {
        &self.token0
    }

    /// Asset 1 ledger.
    pub fn token1(&self) -> &Token {
        &self.token1
    }
}
