//! Poll-until-ready resolution
//!
//! The analysis service has no push channel: once a document is uploaded,
//! the only way to learn that the report exists is to ask again. The
//! resolver owns that loop — one status query per cycle, a timed sleep in
//! between, and a budget so an unresponsive service cannot hold the caller
//! forever.

use std::time::Duration;

use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::AnalysisClient;
use crate::error::ResolutionError;
use analyst_core::domain::{JobKey, JobStatus, Report};

const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);
const DEFAULT_MAX_ATTEMPTS: u32 = 120;
const DEFAULT_DEADLINE: Duration = Duration::from_secs(600);

/// Backoff shape between poll cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// The same delay after every pending response
    Fixed,
    /// Delay doubles after each pending response, capped at `max_interval`
    Exponential {
        /// Upper bound for the growing delay
        max_interval: Duration,
    },
}

/// Polling configuration
///
/// All knobs are explicit so deployments can tune them: the base interval,
/// the backoff shape, and two independent budgets (attempt count and wall
/// clock). The defaults are bounded; use [`PollPolicy::unbounded`] only when
/// the caller supplies its own cancellation signal.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Delay between poll cycles (initial delay when backoff grows)
    pub interval: Duration,

    /// How the delay evolves across cycles
    pub backoff: Backoff,

    /// Maximum number of status queries before giving up
    pub max_attempts: Option<u32>,

    /// Maximum wall-clock time before giving up
    pub deadline: Option<Duration>,
}

impl PollPolicy {
    /// Creates a bounded fixed-interval policy with the default budgets
    /// (120 attempts, 10 minute deadline)
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            backoff: Backoff::Fixed,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            deadline: Some(DEFAULT_DEADLINE),
        }
    }

    /// Creates a bounded policy whose delay doubles each cycle up to
    /// `max_interval`
    pub fn exponential(initial: Duration, max_interval: Duration) -> Self {
        Self {
            interval: initial,
            backoff: Backoff::Exponential { max_interval },
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            deadline: Some(DEFAULT_DEADLINE),
        }
    }

    /// Creates a policy with no attempt or time budget
    ///
    /// Without a budget a resolve call against a service that never finishes
    /// will never return; pair this with a cancellation token.
    pub fn unbounded(interval: Duration) -> Self {
        Self {
            interval,
            backoff: Backoff::Fixed,
            max_attempts: None,
            deadline: None,
        }
    }

    /// Replaces the attempt budget
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Replaces the wall-clock budget
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Validates the policy
    pub fn validate(&self) -> Result<(), ResolutionError> {
        if self.interval.is_zero() {
            return Err(ResolutionError::InvalidPolicy(
                "interval must be greater than 0".to_string(),
            ));
        }

        if let Backoff::Exponential { max_interval } = self.backoff {
            if max_interval < self.interval {
                return Err(ResolutionError::InvalidPolicy(
                    "max_interval must be at least the initial interval".to_string(),
                ));
            }
        }

        if self.max_attempts == Some(0) {
            return Err(ResolutionError::InvalidPolicy(
                "max_attempts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Delay to sleep after the given 1-based pending attempt
    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed => self.interval,
            Backoff::Exponential { max_interval } => {
                let factor = 1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
                self.interval
                    .checked_mul(factor)
                    .map_or(max_interval, |d| d.min(max_interval))
            }
        }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

/// Resolves a submitted job to its report by polling
///
/// One resolver per in-flight job key; resolvers hold no mutable state, so
/// concurrent documents each get an independent resolve call and never share
/// anything but the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PollingResolver {
    client: AnalysisClient,
    policy: PollPolicy,
}

impl PollingResolver {
    /// Creates a resolver with the default bounded policy
    pub fn new(client: AnalysisClient) -> Self {
        Self {
            client,
            policy: PollPolicy::default(),
        }
    }

    /// Creates a resolver with an explicit policy
    pub fn with_policy(client: AnalysisClient, policy: PollPolicy) -> Self {
        Self { client, policy }
    }

    /// The policy this resolver polls under
    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Polls until the report for `key` is available
    ///
    /// Returns as soon as a poll observes a ready report. A pending response
    /// suspends the task for the policy's current delay and tries again;
    /// polls for one key are strictly sequential within a call. Transport
    /// failures, rejections, and undecodable bodies are terminal.
    ///
    /// # Arguments
    /// * `key` - The job key returned at submission
    ///
    /// # Returns
    /// The markdown report produced by the service
    pub async fn resolve(&self, key: &JobKey) -> Result<Report, ResolutionError> {
        self.resolve_with_cancel(key, CancellationToken::new()).await
    }

    /// Polls until the report is available or `cancel` fires
    ///
    /// The token is checked before every status query and during every
    /// sleep, so an abandoned resolve stops at the next suspension point
    /// rather than outliving caller interest.
    pub async fn resolve_with_cancel(
        &self,
        key: &JobKey,
        cancel: CancellationToken,
    ) -> Result<Report, ResolutionError> {
        self.policy.validate()?;

        let started = Instant::now();
        let mut attempts: u32 = 0;

        loop {
            if cancel.is_cancelled() {
                return Err(ResolutionError::Cancelled);
            }

            attempts += 1;
            debug!("Polling status for {} (attempt {})", key, attempts);

            match self.client.fetch_status(key).await? {
                JobStatus::Ready(report) => {
                    info!(
                        "Report ready for {} after {} attempt(s) ({:?})",
                        key,
                        attempts,
                        started.elapsed()
                    );
                    return Ok(report);
                }
                JobStatus::Pending => {
                    debug!("{} still pending", key);
                }
            }

            if let Some(max) = self.policy.max_attempts {
                if attempts >= max {
                    warn!("Giving up on {} after {} attempt(s)", key, attempts);
                    return Err(ResolutionError::DeadlineExceeded { attempts });
                }
            }

            if let Some(deadline) = self.policy.deadline {
                if started.elapsed() >= deadline {
                    warn!(
                        "Giving up on {} after {:?} ({} attempt(s))",
                        key,
                        started.elapsed(),
                        attempts
                    );
                    return Err(ResolutionError::DeadlineExceeded { attempts });
                }
            }

            let delay = self.policy.delay_for_attempt(attempts);

            tokio::select! {
                _ = cancel.cancelled() => return Err(ResolutionError::Cancelled),
                _ = time::sleep(delay) => {}
            }
        }
    }
}
