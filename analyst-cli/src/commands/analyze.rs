//! Analyze command handler
//!
//! Drives the full flow: read the document, upload it, poll until the
//! report is ready, print it. Upload failures and analysis failures are
//! reported separately so the user knows which half broke.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::*;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use analyst_client::{AnalysisClient, PollPolicy, PollingResolver, ResolutionError};
use analyst_core::domain::Document;

use crate::config::Config;
use crate::types::AnalysisPhase;

/// Upload a document and wait for its report
pub async fn handle_analyze(
    config: &Config,
    path: &Path,
    interval: u64,
    max_attempts: u32,
    deadline: u64,
    backoff: bool,
) -> Result<()> {
    let mut phase = AnalysisPhase::Idle;
    print_phase(phase);

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Path has no usable file name")?;
    let document = Document::new(file_name, bytes)?;

    let client = AnalysisClient::new(&config.api_base);

    phase = AnalysisPhase::Submitting;
    print_phase(phase);
    println!(
        "{}",
        format!("Uploading {} ({} bytes)...", document.file_name(), document.len()).bold()
    );

    let ack = match client.submit_document(&document).await {
        Ok(ack) => ack,
        Err(e) => {
            phase = AnalysisPhase::Failed;
            print_phase(phase);
            println!("{}", format!("✗ Upload failed: {}", e).red());
            return Err(e.into());
        }
    };

    println!("{}", "✓ Upload accepted".green());

    // Ctrl-C cancels between poll cycles instead of killing mid-request.
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });

    phase = AnalysisPhase::Polling;
    print_phase(phase);
    println!(
        "{}",
        "Waiting for the analysis to finish. This may take a minute.".dimmed()
    );

    let policy = build_policy(interval, max_attempts, deadline, backoff);
    debug!("Polling with policy {:?}", policy);
    let resolver = PollingResolver::with_policy(client, policy);

    match resolver.resolve_with_cancel(ack.job_key(), cancel).await {
        Ok(report) => {
            phase = AnalysisPhase::Done;
            print_phase(phase);
            println!("{}", format!("✓ Analysis complete: {}", ack.job_key()).green().bold());
            println!();
            println!("{}", report.as_markdown());
            Ok(())
        }
        Err(e) => {
            phase = AnalysisPhase::Failed;
            print_phase(phase);
            match &e {
                ResolutionError::Cancelled => {
                    println!("{}", "✗ Cancelled before the report was ready".yellow());
                }
                ResolutionError::DeadlineExceeded { attempts } => {
                    println!(
                        "{}",
                        format!("✗ Gave up after {} poll(s); the job may still finish later", attempts)
                            .yellow()
                    );
                }
                _ => {
                    println!("{}", format!("✗ Analysis failed: {}", e).red());
                }
            }
            Err(e.into())
        }
    }
}

/// Translates CLI flags into a poll policy; 0 disables a budget
fn build_policy(interval: u64, max_attempts: u32, deadline: u64, backoff: bool) -> PollPolicy {
    let interval = Duration::from_secs(interval);

    let mut policy = if backoff {
        PollPolicy::exponential(interval, interval.max(Duration::from_secs(60)))
    } else {
        PollPolicy::new(interval)
    };

    policy.max_attempts = (max_attempts > 0).then_some(max_attempts);
    policy.deadline = (deadline > 0).then(|| Duration::from_secs(deadline));

    policy
}

fn print_phase(phase: AnalysisPhase) {
    println!("{}", format!("[{}]", phase).dimmed());
}
