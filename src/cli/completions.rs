//! `lighthouse-pipeline completions` - Generate shell completions
//!
//! Supports bash, zsh, fish, PowerShell and elvish.

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::fs;
use std::path::Path;

pub fn generate_completions(shell: Shell) -> Result<String> {
    use clap_complete::generate;

    let mut cmd = super::Args::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, "lighthouse-pipeline", &mut buf);

    String::from_utf8(buf).context("Failed to generate completions")
}

pub fn save_completions(completions: &str, output_path: &Path) -> Result<()> {
    fs::write(output_path, completions)
        .with_context(|| format!("Failed to write completions to: {}", output_path.display()))?;
    Ok(())
}
