//! Document upload endpoint

use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::AnalysisClient;
use crate::error::SubmissionError;
use analyst_core::domain::{Document, JobKey};

/// Acknowledgment that the service accepted a submission
///
/// Carries the job key the document will be tracked under, so the caller can
/// hand it straight to [`crate::PollingResolver::resolve`].
#[derive(Debug, Clone)]
pub struct Ack {
    job_key: JobKey,
}

impl Ack {
    /// The key to poll for the analysis result
    pub fn job_key(&self) -> &JobKey {
        &self.job_key
    }

    /// Consumes the ack, yielding the job key
    pub fn into_job_key(self) -> JobKey {
        self.job_key
    }
}

impl AnalysisClient {
    /// Upload a document for analysis
    ///
    /// Issues exactly one POST to `/api/docs/upload` with the document as a
    /// multipart form field named `file`. Any 2xx response counts as
    /// accepted; the service keys the resulting job by the uploaded file
    /// name, so no response body is consulted.
    ///
    /// # Arguments
    /// * `document` - The document to submit
    ///
    /// # Returns
    /// An [`Ack`] carrying the job key for later polling
    ///
    /// # Example
    /// ```no_run
    /// # use analyst_client::AnalysisClient;
    /// # use analyst_core::domain::Document;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = AnalysisClient::new("http://localhost:8080");
    /// let document = Document::new("q3-call.pdf", std::fs::read("q3-call.pdf")?)?;
    /// let ack = client.submit_document(&document).await?;
    /// println!("accepted as {}", ack.job_key());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_document(&self, document: &Document) -> Result<Ack, SubmissionError> {
        if document.is_empty() {
            return Err(SubmissionError::InvalidDocument(
                "document payload is empty".to_string(),
            ));
        }

        let url = format!("{}/api/docs/upload", self.base_url);

        debug!(
            "Uploading {} ({} bytes) to {}",
            document.file_name(),
            document.len(),
            url
        );

        let part = Part::bytes(document.bytes().to_vec())
            .file_name(document.file_name().to_string());
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SubmissionError::rejected(status.as_u16(), message));
        }

        Ok(Ack {
            job_key: document.job_key(),
        })
    }
}
