//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Deployment bootstrap for the application infrastructure stack.
///
/// Resolves context parameters and the ambient deployment environment, then
/// synthesizes the construct tree into a deployment manifest.
#[derive(Parser, Debug)]
#[command(name = "app-infra")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Context parameter for this run (repeatable)
    #[arg(short = 'c', long = "context", value_name = "KEY=VALUE")]
    pub context: Vec<String>,

    /// Directory holding infra.json and .env files
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub app_dir: PathBuf,

    /// Output directory for synthesized artifacts
    #[arg(short, long, default_value = "infra.out", value_name = "DIR")]
    pub output: PathBuf,

    /// Suppress the resolved-configuration summary
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synthesize the construct tree (the default)
    Synth,
    /// Print the resolved context and exit
    Context,
}
