//! CLI-local types

use std::fmt;

/// Where the analyze flow currently is
///
/// The client crates stay stateless; the CLI (the caller) owns this value
/// and drives it forward as the flow progresses. Done and Failed are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Nothing in flight
    Idle,
    /// Upload request in flight
    Submitting,
    /// Waiting for the report
    Polling,
    /// Report received
    Done,
    /// Upload or polling failed
    Failed,
}

impl AnalysisPhase {
    /// Whether the flow has ended, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Polling => "polling",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_done_and_failed_are_terminal() {
        assert!(!AnalysisPhase::Idle.is_terminal());
        assert!(!AnalysisPhase::Submitting.is_terminal());
        assert!(!AnalysisPhase::Polling.is_terminal());
        assert!(AnalysisPhase::Done.is_terminal());
        assert!(AnalysisPhase::Failed.is_terminal());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(AnalysisPhase::Polling.to_string(), "polling");
        assert_eq!(AnalysisPhase::Failed.to_string(), "failed");
    }
}
