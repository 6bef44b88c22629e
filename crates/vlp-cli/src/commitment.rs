//! # Commitment Subcommand
//!
//! Derives a deposit commitment and its withdrawal nullifier from a pair of
//! asset amounts and a secret, printing the result as JSON. When no secret
//! is supplied a random one is generated and echoed back — the caller must
//! keep it to withdraw later.

use anyhow::{bail, Context};
use clap::Args;
use rand::RngCore;

use vlp_core::Amount;
use vlp_crypto::{deposit_commitment, withdrawal_nullifier};

/// Arguments for the commitment subcommand.
#[derive(Args, Debug)]
pub struct CommitmentArgs {
    /// Asset 0 amount in smallest units.
    #[arg(long)]
    pub amount0: u128,

    /// Asset 1 amount in smallest units.
    #[arg(long)]
    pub amount1: u128,

    /// 32-byte secret as 64 hex characters. Generated randomly when omitted.
    #[arg(long)]
    pub secret: Option<String>,
}

fn parse_secret(hex: &str) -> anyhow::Result<[u8; 32]> {
    if hex.len() != 64 {
        bail!("secret must be exactly 64 hex characters, got {}", hex.len());
    }
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .context("secret contains a non-hex character")?;
    }
    Ok(out)
}

fn secret_hex(secret: &[u8; 32]) -> String {
    secret.iter().map(|b| format!("{b:02x}")).collect()
}

/// Run the commitment subcommand.
pub fn run(args: &CommitmentArgs) -> anyhow::Result<()> {
    let secret = match &args.secret {
        Some(hex) => parse_secret(hex)?,
        None => {
            let mut bytes = [0u8; 32];
            rand::thread_rng().fill_bytes(&mut bytes);
            bytes
        }
    };

    let amounts = [Amount::new(args.amount0), Amount::new(args.amount1)];
    let commitment = deposit_commitment(&amounts, &secret);
    let nullifier = withdrawal_nullifier(&commitment, &secret);

    let out = serde_json::json!({
        "commitment": commitment.to_hex(),
        "withdrawal_nullifier": nullifier.to_hex(),
        "amount0": args.amount0,
        "amount1": args.amount1,
        "secret": secret_hex(&secret),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
