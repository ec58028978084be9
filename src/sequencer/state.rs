use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ProductResult, StreamEvent, SummaryReport};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
    Completed,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visible state of the current run. Only the sequencer mutates it;
/// consumers get clones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRun {
    pub run_id: Option<Uuid>,
    pub query: String,
    pub status: RunStatus,
    pub progress_percent: u8,
    pub events: Vec<StreamEvent>,
    pub results: Vec<ProductResult>,
    pub summary: Option<SummaryReport>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl SearchRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    /// Discard everything from the previous run and enter `running`.
    pub(crate) fn reset(&mut self, run_id: Uuid, query: &str) {
        *self = Self {
            run_id: Some(run_id),
            query: query.to_string(),
            status: RunStatus::Running,
            started_at: Some(Utc::now()),
            ..Self::default()
        };
    }

    pub fn elapsed_ms(&self) -> u64 {
        let Some(start) = self.started_at else {
            return 0;
        };
        let end = self.completed_at.unwrap_or_else(Utc::now);
        end.signed_duration_since(start).num_milliseconds().max(0) as u64
    }
}

/// Result of a `start` call. Rejections are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started(Uuid),
    EmptyQuery,
    AlreadyRunning,
}

impl StartOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Self::Started(_) => None,
            Self::EmptyQuery => Some("empty_query"),
            Self::AlreadyRunning => Some("already_running"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventKind, StreamEvent};

    #[test]
    fn test_new_run_is_idle_and_empty() {
        let run = SearchRun::new();
        assert_eq!(run.status, RunStatus::Idle);
        assert_eq!(run.progress_percent, 0);
        assert!(run.events.is_empty());
        assert!(run.summary.is_none());
        assert_eq!(run.elapsed_ms(), 0);
    }

    #[test]
    fn test_reset_clears_previous_run() {
        let mut run = SearchRun::new();
        run.progress_percent = 100;
        run.status = RunStatus::Completed;
        run.events.push(StreamEvent::new(EventKind::Info, "old", None));
        run.completed_at = Some(Utc::now());

        let id = Uuid::new_v4();
        run.reset(id, "headphones");
        assert_eq!(run.run_id, Some(id));
        assert_eq!(run.query, "headphones");
        assert_eq!(run.status, RunStatus::Running);
        assert_eq!(run.progress_percent, 0);
        assert!(run.events.is_empty());
        assert!(run.results.is_empty());
        assert!(run.completed_at.is_none());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RunStatus::Completed).unwrap(), "\"completed\"");
        assert_eq!(RunStatus::Running.to_string(), "running");
    }

    #[test]
    fn test_outcome_reasons() {
        assert_eq!(StartOutcome::EmptyQuery.reason(), Some("empty_query"));
        assert_eq!(StartOutcome::AlreadyRunning.reason(), Some("already_running"));
        assert!(StartOutcome::Started(Uuid::new_v4()).is_started());
    }
}
