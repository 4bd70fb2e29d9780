//! Check command handler
//!
//! One status probe, no polling. Useful for scripting and for peeking at a
//! long-running job without tying up a terminal.

use anyhow::Result;
use colored::*;

use analyst_client::AnalysisClient;
use analyst_core::domain::{JobKey, JobStatus};

use crate::config::Config;

/// Query the status of a previously uploaded document once
pub async fn handle_check(config: &Config, file_name: &str) -> Result<()> {
    let key = JobKey::new(file_name)?;
    let client = AnalysisClient::new(&config.api_base);

    match client.fetch_status(&key).await? {
        JobStatus::Ready(report) => {
            println!("{}", format!("✓ Report ready for {}", key).green().bold());
            println!();
            println!("{}", report.as_markdown());
        }
        JobStatus::Pending => {
            println!("{}", format!("{} is still processing. Try again later.", key).yellow());
        }
    }

    Ok(())
}
