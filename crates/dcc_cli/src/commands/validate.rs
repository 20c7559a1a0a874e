use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use dcc_core::standard_validator;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the DCC XML certificate to lint
    #[arg(short, long)]
    pub file: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    println!("🔍 Validating: {:?}", args.file);

    // 1. Load File
    let xml = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read file: {:?}", args.file))?;

    // 2. Extract (Structural Check)
    let cert = match dcc_core::extract(&xml) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ FATAL: DCC Structure Violation");
            eprintln!("Error: {}", e);
            return Err(e.into());
        }
    };

    println!("✅ Structure OK. Running Lint Rules...");

    // 3. Run the Validation Engine
    let issues = standard_validator().run(&cert);

    // 4. Report Results
    if issues.is_empty() {
        println!("🎉 VALIDATION PASSED!");
        println!("Certificate {} is clean.", cert.certificate_id);
    } else {
        println!("⚠️  Found {} issue(s).", issues.len());
        println!("{:-<50}", "-");

        for issue in issues {
            let icon = if issue.severity.contains("High") { "🛑" } else { "⚠️" };
            println!("{} [{}] {}", icon, issue.code, issue.severity);
            println!("   Msg: {}", issue.message);
            if let Some(field) = issue.field {
                println!("   Ref: {}", field);
            }
            println!("{:-<50}", "-");
        }
    }

    Ok(())
}
