// dcc_cli/src/main.rs
use clap::{Parser, Subcommand};

use dcc_cli::commands;

#[derive(Parser)]
#[command(name = "dcc")]
#[command(about = "Digital Calibration Certificate Toolchain", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the canonical record from a DCC XML certificate
    Extract(commands::extract::ExtractArgs),

    /// Render the NFT metadata document for a DCC XML certificate
    Render(commands::render::RenderArgs),

    /// Lint a DCC XML certificate against the built-in rules
    Validate(commands::validate::ValidateArgs),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract(args) => commands::extract::execute(args)?,
        Commands::Render(args) => commands::render::execute(args)?,
        Commands::Validate(args) => commands::validate::execute(args)?,
    }

    Ok(())
}
