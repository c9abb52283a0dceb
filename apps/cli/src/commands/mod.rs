//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod ai;
mod jobs;

pub use ai::AiCommands;
pub use jobs::JobCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Manage tracked job applications
    Jobs {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// AI helper: extract jobs from emails, draft follow-ups, practice questions
    Ai {
        #[command(subcommand)]
        command: AiCommands,
    },
}

/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Jobs { command } => jobs::handle_job_command(command, config).await,
        Commands::Ai { command } => ai::handle_ai_command(command, config).await,
    }
}
