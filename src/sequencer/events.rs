use uuid::Uuid;

use crate::models::StreamEvent;
use crate::notify::Notification;

/// Messages sent from the sequencer to a live consumer (REPL, headless CLI).
#[derive(Debug, Clone)]
pub enum SequencerEvent {
    /// A run was accepted and its state reset
    RunStarted {
        run_id: Uuid,
        query: String,
    },
    /// A script step was appended to the event log
    Stream(StreamEvent),
    /// Progress advanced
    Progress {
        percent: u8,
    },
    ResultsRevealed {
        count: usize,
    },
    SummaryRevealed,
    /// All script steps emitted; the summary may still be pending
    RunCompleted {
        run_id: Uuid,
        event_count: usize,
    },
    /// Toast forwarded by `EventNotifier`
    Notification(Notification),
}
