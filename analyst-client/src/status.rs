//! Job status endpoint

use tracing::debug;

use crate::AnalysisClient;
use crate::error::ResolutionError;
use analyst_core::domain::{JobKey, JobStatus};
use analyst_core::dto::StatusResponse;

impl AnalysisClient {
    /// Query the status of an analysis job once
    ///
    /// Issues one GET to `/api/research/earning-call-summary` with the
    /// URL-encoded key as the `fileName` query parameter. A JSON body with a
    /// non-empty `report` string means the job is done; anything else decodes
    /// to [`JobStatus::Pending`].
    ///
    /// # Arguments
    /// * `key` - The job key returned at submission
    ///
    /// # Returns
    /// The job status as of this single probe
    pub async fn fetch_status(&self, key: &JobKey) -> Result<JobStatus, ResolutionError> {
        let url = format!(
            "{}/api/research/earning-call-summary?fileName={}",
            self.base_url,
            key.encoded()
        );

        debug!("Checking status for {}", key);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ResolutionError::RejectedByServer {
                status: status.as_u16(),
                message,
            });
        }

        let body: StatusResponse = response.json().await.map_err(|e| {
            ResolutionError::MalformedResponse(format!("failed to decode status body: {}", e))
        })?;

        Ok(body.into_status())
    }
}
