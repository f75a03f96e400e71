mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "zkalgo",
    about = "Convert ZoKrates Groth16 proofs for the Algorand AVM pairing verifier"
)]
struct Cli {
    /// ZoKrates proof document
    #[arg(long, global = true, default_value = "proof.json")]
    proof: PathBuf,
    /// ZoKrates verification key document
    #[arg(long, global = true, default_value = "verification.key")]
    key: PathBuf,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Re-run the pairing check off-chain and print diagnostics
    Verify,
    /// Emit the contract constants and pairing-check expression
    #[command(alias = "compile_contract")]
    CompileContract,
    /// Emit call-argument literals for a contract invocation
    #[command(alias = "compile_proof")]
    CompileProof,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Cmd::Verify => commands::verify::run(&cli.proof, &cli.key)?,
        Cmd::CompileContract => commands::compile_contract::run(&cli.key)?,
        Cmd::CompileProof => commands::compile_proof::run(&cli.proof)?,
    }
    Ok(())
}
