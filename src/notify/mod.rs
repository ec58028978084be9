use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::sequencer::SequencerEvent;

/// A fire-and-forget toast delivered once per completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn search_complete(result_count: usize) -> Self {
        Self::new(
            "Search Complete!",
            format!("Found {} products matching your criteria", result_count),
        )
    }
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the tracing log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, notification: Notification) {
        info!(title = %notification.title, description = %notification.description, "Notification");
    }
}

/// Keeps every delivered notification in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryNotifier {
    delivered: Arc<Mutex<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> Vec<Notification> {
        match self.delivered.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl NotificationSink for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        match self.delivered.lock() {
            Ok(mut guard) => guard.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}

/// Forwards notifications into a sequencer event channel so a single
/// consumer can render toasts inline with the stream.
#[derive(Debug, Clone)]
pub struct EventNotifier {
    tx: mpsc::UnboundedSender<SequencerEvent>,
}

impl EventNotifier {
    pub fn new(tx: mpsc::UnboundedSender<SequencerEvent>) -> Self {
        Self { tx }
    }
}

impl NotificationSink for EventNotifier {
    fn notify(&self, notification: Notification) {
        if self.tx.send(SequencerEvent::Notification(notification)).is_err() {
            warn!("Notification dropped: event channel closed");
        }
    }
}
