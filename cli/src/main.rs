use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use pghr13_bn254_verifier::{
    load_pghr13_witness, ParseOptions, Pghr13Verifier, VerificationMode, VerifierConfig,
};
use tracing::{info, warn};
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "pghr13-verify", about = "Verify a PGHR13 proof on the BN254 curve")]
struct Cli {
    /// Verifying key in libsnark text format
    #[arg(long)]
    vk: PathBuf,
    /// Proof as printed by ZoKrates
    #[arg(long)]
    proof: PathBuf,
    /// Public inputs, comma separated, decimal or 0x-prefixed hexadecimal
    #[arg(long, value_delimiter = ',')]
    witness: Vec<String>,
    /// Check all pairing equations with a single final exponentiation
    #[arg(long)]
    aggregated: bool,
    /// Accept a key with an unreadable IC and a proof with an unreadable B
    #[arg(long, env = "PGHR13_LENIENT")]
    lenient: bool,
}

impl Cli {
    fn config(&self) -> VerifierConfig {
        VerifierConfig {
            mode: if self.aggregated {
                VerificationMode::Aggregated
            } else {
                VerificationMode::Direct
            },
            parse: if self.lenient {
                ParseOptions::lenient()
            } else {
                ParseOptions::strict()
            },
        }
    }
}

/// Logs go to stderr so that stdout only carries the verdict. `RUST_LOG` sets the level.
fn setup_logger() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt::Subscriber::builder()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .finish()
        .init();
}

fn main() -> Result<ExitCode> {
    setup_logger();
    let cli = Cli::parse();
    let verifier = Pghr13Verifier::new(cli.config());

    let vk = verifier
        .load_verifying_key(&cli.vk)
        .with_context(|| format!("failed to load verifying key {}", cli.vk.display()))?;
    let proof = verifier
        .load_proof(&cli.proof)
        .with_context(|| format!("failed to load proof {}", cli.proof.display()))?;
    let witness: Vec<&str> = cli.witness.iter().map(|value| value.trim()).collect();
    let witness = load_pghr13_witness(&witness).context("failed to parse witness")?;
    info!(inputs = witness.len(), mode = ?verifier.config().mode, "verifying proof");

    match verifier.verify(&vk, &proof, &witness) {
        Ok(()) => {
            println!("PASS");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            warn!(error = %err, "proof rejected");
            println!("FAIL");
            Ok(ExitCode::FAILURE)
        }
    }
}
