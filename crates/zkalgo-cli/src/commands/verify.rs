use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use zkalgo_core::{verifier, zokrates};

use crate::output;

pub fn run(proof_path: &Path, key_path: &Path) -> Result<()> {
    output::info("reading proof");
    let proof = zokrates::load_proof(proof_path)
        .with_context(|| format!("loading {}", proof_path.display()))?;
    output::info("reading verification key");
    let key = zokrates::load_verification_key(key_path)
        .with_context(|| format!("loading {}", key_path.display()))?;
    output::label("public inputs", &proof.inputs.len().to_string());

    let pb = output::spinner("evaluating pairing product...");
    let report = verifier::check(&key, &proof)?;
    pb.finish_and_clear();

    // paste-ready constants for cross-checking against the contract
    println!("  vkx_check = Bytes(\"base16\",\"0x{}\")", report.vkx_hex);
    println!("  g1_check = Bytes(\"base16\",\"0x{}\")", report.g1_hex);
    println!("  g2_check = Bytes(\"base16\",\"0x{}\")", report.g2_hex);

    if report.verified {
        println!("{}", "OK".green());
    } else {
        println!("{}", "NOT VERIFIED".red());
    }
    Ok(())
}
