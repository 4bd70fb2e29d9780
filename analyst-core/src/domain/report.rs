//! Report and job-status domain types

/// A completed analysis report
///
/// Markdown text produced by the analysis service. Immutable once received;
/// ownership passes to whatever renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report(String);

impl Report {
    /// Wraps markdown text in a report
    pub fn new(markdown: impl Into<String>) -> Self {
        Self(markdown.into())
    }

    /// The report body as markdown
    pub fn as_markdown(&self) -> &str {
        &self.0
    }

    /// Consumes the report, yielding the markdown body
    pub fn into_markdown(self) -> String {
        self.0
    }
}

/// Status of an analysis job as observed by a single poll
///
/// Transient: exists only for the duration of one status query. Pending is
/// not an error, it is the signal to poll again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// The service has not produced a report yet
    Pending,
    /// The report is available
    Ready(Report),
}

impl JobStatus {
    /// Whether a report is available
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
