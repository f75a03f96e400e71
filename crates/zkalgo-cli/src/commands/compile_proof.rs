use std::path::Path;

use anyhow::{Context, Result};
use zkalgo_core::{pyteal, zokrates};

use crate::output;

pub fn run(proof_path: &Path) -> Result<()> {
    output::info("reading proof");
    let proof = zokrates::load_proof(proof_path)
        .with_context(|| format!("loading {}", proof_path.display()))?;

    let args = pyteal::proof_args(&proof)?;
    print!("{}", pyteal::call_snippet(&args));
    Ok(())
}
