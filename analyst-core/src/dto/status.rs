//! Status endpoint DTO

use serde::{Deserialize, Serialize};

use crate::domain::{JobStatus, Report};

/// Body returned by the status endpoint
///
/// The service signals completion by the presence of a non-empty `report`
/// string; a null, absent, or empty field means the job is still running.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub report: Option<String>,
}

impl StatusResponse {
    /// Maps the wire shape onto a [`JobStatus`]
    pub fn into_status(self) -> JobStatus {
        match self.report {
            Some(report) if !report.is_empty() => JobStatus::Ready(Report::new(report)),
            _ => JobStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_report_is_ready() {
        let response: StatusResponse =
            serde_json::from_str(r##"{"report": "# Q3 Summary"}"##).unwrap();
        let status = response.into_status();
        assert!(status.is_ready());
        match status {
            JobStatus::Ready(report) => assert_eq!(report.as_markdown(), "# Q3 Summary"),
            JobStatus::Pending => panic!("expected ready"),
        }
    }

    #[test]
    fn test_null_report_is_pending() {
        let response: StatusResponse = serde_json::from_str(r#"{"report": null}"#).unwrap();
        assert_eq!(response.into_status(), JobStatus::Pending);
    }

    #[test]
    fn test_absent_report_is_pending() {
        let response: StatusResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.into_status(), JobStatus::Pending);
    }

    #[test]
    fn test_empty_string_report_is_pending() {
        let response: StatusResponse = serde_json::from_str(r#"{"report": ""}"#).unwrap();
        assert_eq!(response.into_status(), JobStatus::Pending);
    }
}
