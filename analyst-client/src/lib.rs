//! Analyst HTTP Client
//!
//! A simple, type-safe HTTP client for the document analysis service.
//!
//! The service exposes two endpoints: a multipart upload that enqueues an
//! analysis job, and a status query that eventually carries the finished
//! markdown report. This crate wraps both behind [`AnalysisClient`] and adds
//! [`PollingResolver`], which owns the wait-until-ready loop.
//!
//! # Example
//!
//! ```no_run
//! use analyst_client::{AnalysisClient, PollingResolver};
//! use analyst_core::domain::Document;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AnalysisClient::new("http://localhost:8080");
//!
//!     let document = Document::new("q3-call.pdf", std::fs::read("q3-call.pdf")?)?;
//!     let ack = client.submit_document(&document).await?;
//!
//!     let resolver = PollingResolver::new(client);
//!     let report = resolver.resolve(ack.job_key()).await?;
//!
//!     println!("{}", report.as_markdown());
//!     Ok(())
//! }
//! ```

pub mod error;
mod resolver;
mod status;
mod upload;

// Re-export commonly used types
pub use error::{ResolutionError, SubmissionError};
pub use resolver::{Backoff, PollPolicy, PollingResolver};
pub use upload::Ack;

pub use analyst_core::domain::{Document, JobKey, JobStatus, Report};

use reqwest::Client;

/// HTTP client for the document analysis service
///
/// Holds the service base URL and a reusable reqwest client. The client is
/// cheap to clone and holds no mutable state, so concurrent submissions for
/// different documents can share one instance or clone freely.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    /// Base URL of the analysis service (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl AnalysisClient {
    /// Create a new analysis client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the analysis service (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use analyst_client::AnalysisClient;
    ///
    /// let client = AnalysisClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new analysis client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the analysis service
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use analyst_client::AnalysisClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = AnalysisClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the analysis service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AnalysisClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = AnalysisClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = AnalysisClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
