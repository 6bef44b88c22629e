//! # Demo Subcommand
//!
//! Runs a scripted end-to-end flow against an in-memory protocol instance:
//! KYC registration, a private deposit, a fee-paying swap, yield accrual, a
//! Merkle snapshot, a range-disclosure report, and a partial withdrawal.
//! Prints a JSON summary of the resulting state.
//!
//! With `--transparent` the flow produces real (transparent-mock) proofs
//! bound to each operation's public inputs; otherwise the permissive
//! fallback verifier accepts the empty proof.

use anyhow::Context;
use clap::Args;
use rand::RngCore;
use tracing::info;

use vlp_core::{Address, Amount, Timestamp};
use vlp_crypto::{deposit_commitment, kyc_commitment, withdrawal_nullifier};
use vlp_state::{inputs, KycAttributes, KycTier, Protocol, ProtocolConfig};
use vlp_zkp::{TransparentVerifier, VerifierConfig};

/// Arguments for the demo subcommand.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Use the transparent mock verifier and generate binding proofs,
    /// instead of the permissive fallback with empty proofs.
    #[arg(long)]
    pub transparent: bool,
}

const AUTHORITY: Address = Address([0xAA; 20]);
const ALICE: Address = Address([0x01; 20]);
const BOB: Address = Address([0x02; 20]);

fn prove(transparent: bool, public_inputs: &[u8]) -> Vec<u8> {
    if transparent {
        TransparentVerifier::prove(public_inputs)
    } else {
        Vec::new()
    }
}

/// Run the demo subcommand.
pub fn run(args: &DemoArgs) -> anyhow::Result<()> {
    let config = ProtocolConfig {
        verifier: if args.transparent {
            VerifierConfig::Transparent
        } else {
            VerifierConfig::Permissive
        },
        ..ProtocolConfig::default()
    };
    let mut protocol = Protocol::new(AUTHORITY, config).context("wiring protocol")?;
    let now = Timestamp::now();

    // Fixture balances: Alice provides liquidity, Bob swaps.
    protocol.mint_token0(ALICE, Amount::new(10_000_000_000))?;
    protocol.mint_token1(ALICE, Amount::new(10 * 10u128.pow(18)))?;
    protocol.mint_token0(BOB, Amount::new(1_000_000_000))?;

    // Alice registers at the pseudonymous tier.
    let kyc = kyc_commitment(30, *b"CH", false);
    let attrs = KycAttributes {
        age_verified: true,
        jurisdiction_compliant: true,
        accredited_investor: false,
    };
    let proof = prove(
        args.transparent,
        &inputs::kyc_inputs(&ALICE, &kyc, KycTier::Pseudonymous, &attrs),
    );
    protocol.register_kyc(ALICE, kyc, KycTier::Pseudonymous, attrs, &proof, now)?;

    // Private deposit: 1000 USDC + 1 WETH under a fresh commitment.
    let mut secret = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut secret);
    let amount0 = Amount::new(1_000_000_000);
    let amount1 = Amount::new(10u128.pow(18));
    let commitment = deposit_commitment(&[amount0, amount1], &secret);
    let proof = prove(
        args.transparent,
        &inputs::deposit_inputs(&commitment, amount0, amount1),
    );
    let liquidity = protocol.deposit(ALICE, commitment, amount0, amount1, &proof, now)?;
    info!(%commitment, %liquidity, "deposited");

    // Bob swaps 10 USDC for WETH, paying the 0.3% fee.
    let amount_in = Amount::new(10_000_000);
    let amount_out = protocol.quote_swap0(amount_in)?;
    protocol.swap(BOB, amount_in, Amount::ZERO, Amount::ZERO, amount_out, BOB)?;

    // Accrue the fee entitlement and publish a snapshot root.
    let accrue_time = now.plus_secs(60)?;
    let accrued = protocol.accrue_yield(commitment, accrue_time)?;
    let root = protocol.publish_snapshot(AUTHORITY, now.plus_secs(120)?)?;

    // Disclose the yield range [0, accrued] over a window around the accrual.
    let start = now.plus_secs(-60)?;
    let end = now.plus_secs(90)?;
    let proof = prove(
        args.transparent,
        &inputs::disclosure_inputs(&commitment, start, end, Amount::ZERO, accrued),
    );
    let report_id = protocol.generate_report(
        ALICE,
        commitment,
        start,
        end,
        Amount::ZERO,
        accrued,
        &proof,
        now.plus_secs(150)?,
    )?;
    let report_verified = protocol
        .report(&report_id)
        .map(|r| r.verified)
        .unwrap_or(false);

    // Partial withdrawal: half the position against a fresh nullifier.
    let nullifier = withdrawal_nullifier(&commitment, &secret);
    let half = Amount::new(liquidity.value() / 2);
    let proof = prove(
        args.transparent,
        &inputs::withdrawal_inputs(&commitment, &nullifier, half),
    );
    let (paid0, paid1) = protocol.withdraw(ALICE, commitment, nullifier, half, &proof)?;

    let (reserve0, reserve1) = protocol.pool().reserves();
    let (fee0, fee1) = protocol.pool().cumulative_fees();
    let summary = serde_json::json!({
        "verifier": if args.transparent { "transparent" } else { "permissive" },
        "commitment": commitment.to_hex(),
        "liquidity_minted": liquidity,
        "swap": { "amount_in": amount_in, "amount_out": amount_out },
        "cumulative_fees": { "token0": fee0, "token1": fee1 },
        "yield_accrued": accrued,
        "snapshot_root": root.to_hex(),
        "report": { "id": report_id.to_hex(), "verified": report_verified },
        "withdrawal": { "liquidity": half, "paid0": paid0, "paid1": paid1 },
        "reserves": { "token0": reserve0, "token1": reserve1 },
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
