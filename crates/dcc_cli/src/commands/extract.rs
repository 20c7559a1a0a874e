use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Path to the DCC XML certificate
    #[arg(short, long)]
    pub file: PathBuf,
}

pub fn execute(args: ExtractArgs) -> Result<()> {
    println!("🔍 Extracting: {:?}", args.file);

    let xml = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read file: {:?}", args.file))?;

    let cert = dcc_core::extract(&xml)?;
    tracing::debug!(certificate_id = %cert.certificate_id, "extraction complete");

    println!("✅ Parsed certificate {}", cert.certificate_id);
    println!("{}", serde_json::to_string_pretty(&cert)?);

    Ok(())
}
