//! amalg CLI

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueHint};

use amalg_core::expand::expand_file;

/// CLI entrypoint for amalg.
///
/// Exactly two positional arguments, no flags: clap rejects any other shape
/// with a usage message and a non-zero exit before the output path is opened.
#[derive(Debug, Parser)]
#[command(
    name = "amalg",
    about = "Flatten a tree of quoted includes into a single file"
)]
pub struct Cli {
    /// Root file to expand
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Destination for the flattened output (created or truncated)
    #[arg(value_hint = ValueHint::FilePath)]
    output: PathBuf,
}

/// Parse CLI args and run the expansion.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    expand_file(&cli.input, &cli.output)
}
