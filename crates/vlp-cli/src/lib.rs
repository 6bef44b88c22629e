//! # vlp-cli — VeilPool Command-Line Tool
//!
//! Handler modules for the `vlp` binary. Each subcommand owns an `Args`
//! struct and a `run` entry point returning `anyhow::Result`.

pub mod commitment;
pub mod demo;
