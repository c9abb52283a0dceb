//! jobtrack CLI
//!
//! Command-line frontend for the jobtrack API: list and edit job applications
//! and use the AI helper.

mod api;
mod commands;
mod config;
mod heuristic;
mod id_resolver;

use anyhow::Result;
use clap::Parser;
use commands::{handle_command, Commands};
use config::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jobtrack")]
#[command(about = "Track job applications and draft follow-ups", long_about = None)]
struct Cli {
    /// jobtrack API URL
    #[arg(long, env = "JOBTRACK_API_URL", default_value = "http://localhost:5050")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
    };

    handle_command(cli.command, &config).await
}
