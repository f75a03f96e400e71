use std::path::Path;

use anyhow::{Context, Result};
use zkalgo_core::{pyteal, zokrates};

use crate::output;

pub fn run(key_path: &Path) -> Result<()> {
    output::info("reading verification key");
    let key = zokrates::load_verification_key(key_path)
        .with_context(|| format!("loading {}", key_path.display()))?;

    print!("{}", pyteal::contract_fragments(&key));
    Ok(())
}
