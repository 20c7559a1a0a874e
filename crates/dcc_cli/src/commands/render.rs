use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Path to the DCC XML certificate
    #[arg(short, long)]
    pub file: PathBuf,

    /// JSON metadata template; the bundled template is used when omitted
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Gateway URL of the already-uploaded certificate image
    #[arg(long)]
    pub image_url: Option<String>,

    /// Gateway URL of the already-uploaded certificate file
    #[arg(long)]
    pub certificate_url: Option<String>,

    /// Write the metadata JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    println!("🛠️  Rendering metadata for: {:?}", args.file);

    let xml = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read file: {:?}", args.file))?;

    let template = match &args.template {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template: {:?}", path))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Template is not valid JSON: {:?}", path))?
        }
        None => dcc_core::default_template()?,
    };

    let cert = dcc_core::extract(&xml)?;
    let metadata = dcc_core::render(
        &cert,
        &template,
        args.image_url.as_deref(),
        args.certificate_url.as_deref(),
    )?;

    let json = serde_json::to_string_pretty(&metadata)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write output: {:?}", path))?;
            println!("💾 Metadata written to {:?}", path);
        }
        None => println!("{}", json),
    }

    println!("🎉 Rendered metadata for certificate {}", cert.certificate_id);
    Ok(())
}
