//! Validate Command
//!
//! Runs the submission form checks over a JSON file, without posting it.

use std::path::Path;

use anyhow::{bail, Context};
use showcase_core::FormData;
use tracing::info;

pub fn validate(path: &Path) -> anyhow::Result<()> {
    let form = read_form(path)?;
    let errors = form.validate();
    if errors.is_empty() {
        info!("{} passed validation", path.display());
        println!("✅ \"{}\" is ready to submit", form.title.trim());
        return Ok(());
    }

    for error in &errors {
        println!("❌ {}", error);
    }
    bail!("{} has {} validation error(s): {}", path.display(), errors.len(), errors.join(", "))
}

fn read_form(path: &Path) -> anyhow::Result<FormData> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))
}
