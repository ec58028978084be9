use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Presentation category of a stream event. Consumers pick icons and badges
/// from it; the sequencer never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Info,
    Success,
    Warning,
    Error,
    Progress,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Progress => "progress",
        }
    }

    /// Badge label shown next to the message.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Progress => "Processing",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the live stream. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamEvent {
    pub id: Uuid,
    pub kind: EventKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl StreamEvent {
    pub fn new(kind: EventKind, message: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            detail,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_ids_unique_for_rapid_emissions() {
        let ids: std::collections::HashSet<Uuid> = (0..500)
            .map(|_| StreamEvent::new(EventKind::Info, "tick", None).id)
            .collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_event_kind_serializes_lowercase() {
        let json = serde_json::to_string(&EventKind::Progress).unwrap();
        assert_eq!(json, "\"progress\"");
    }

    #[test]
    fn test_progress_badge_reads_processing() {
        assert_eq!(EventKind::Progress.badge(), "Processing");
        assert_eq!(EventKind::Info.badge(), "Info");
    }

    #[test]
    fn test_detail_omitted_when_absent() {
        let event = StreamEvent::new(EventKind::Success, "done", None);
        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("detail").is_none());
        assert_eq!(value["kind"], "success");
    }
}
