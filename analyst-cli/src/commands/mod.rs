//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod analyze;
mod check;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Upload a document and wait for its analysis report
    Analyze {
        /// Path to the document to upload
        path: PathBuf,

        /// Seconds between status polls
        #[arg(long, default_value_t = 5)]
        interval: u64,

        /// Maximum number of polls before giving up (0 = unbounded)
        #[arg(long, default_value_t = 120)]
        max_attempts: u32,

        /// Overall deadline in seconds (0 = unbounded)
        #[arg(long, default_value_t = 600)]
        deadline: u64,

        /// Double the delay after each pending poll instead of keeping it fixed
        #[arg(long)]
        backoff: bool,
    },
    /// Check once whether a report is ready for a previously uploaded file
    Check {
        /// File name the document was uploaded under
        file_name: String,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Analyze {
            path,
            interval,
            max_attempts,
            deadline,
            backoff,
        } => analyze::handle_analyze(config, &path, interval, max_attempts, deadline, backoff).await,
        Commands::Check { file_name } => check::handle_check(config, &file_name).await,
    }
}
