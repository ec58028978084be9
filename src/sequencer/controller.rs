use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{mpsc, Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use super::events::SequencerEvent;
use super::schedule::{Pacing, Schedule, Task};
use super::script::Script;
use super::state::{RunStatus, SearchRun, StartOutcome};
use crate::catalog::CatalogProvider;
use crate::models::StreamEvent;
use crate::notify::{Notification, NotificationSink};

struct ActiveRun {
    run_id: Uuid,
    cancel_token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

/// Owns the single `SearchRun` and plays the shopping script into it.
///
/// Each accepted `start` gets a fresh run id and cancellation token. The
/// token of the previous run is cancelled first, and every mutation the
/// scheduler makes re-checks the run id under the state lock, so tasks of a
/// superseded run (including pending reveals) can never touch the new run.
#[derive(Clone)]
pub struct SearchSequencer {
    state: Arc<RwLock<SearchRun>>,
    active: Arc<Mutex<Option<ActiveRun>>>,
    catalog: Arc<dyn CatalogProvider>,
    notifier: Arc<dyn NotificationSink>,
    pacing: Pacing,
    event_tx: Option<mpsc::UnboundedSender<SequencerEvent>>,
}

impl SearchSequencer {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        notifier: Arc<dyn NotificationSink>,
        pacing: Pacing,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(SearchRun::new())),
            active: Arc::new(Mutex::new(None)),
            catalog,
            notifier,
            pacing,
            event_tx: None,
        }
    }

    /// Attach an event channel for streaming run events to a REPL or other consumer.
    pub fn with_event_channel(mut self, tx: mpsc::UnboundedSender<SequencerEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    /// Start a run for `query`. Empty queries and calls made while a run is
    /// in progress are rejected without touching state.
    pub async fn start(&self, query: &str) -> StartOutcome {
        let query = query.trim();
        if query.is_empty() {
            debug!("Ignoring start with empty query");
            return StartOutcome::EmptyQuery;
        }

        let mut active = self.active.lock().await;
        let mut state = self.state.write().await;
        if state.is_running() {
            debug!(query = %query, current = %state.query, "Ignoring start while a run is in progress");
            return StartOutcome::AlreadyRunning;
        }

        // A completed run may still have its summary reveal pending.
        if let Some(previous) = active.take() {
            previous.cancel_token.cancel();
            debug!(run_id = %previous.run_id, "Cancelled previous run");
        }

        let run_id = Uuid::new_v4();
        state.reset(run_id, query);
        emit(&self.event_tx, SequencerEvent::RunStarted {
            run_id,
            query: query.to_string(),
        });
        drop(state);

        let script = Script::shopping(query);
        let schedule = Schedule::plan(&script, &self.pacing);
        let cancel_token = CancellationToken::new();
        info!(
            run_id = %run_id,
            query = %query,
            steps = script.len(),
            planned_ms = schedule.total().as_millis() as u64,
            "Search run started"
        );

        let worker = RunWorker {
            run_id,
            query: query.to_string(),
            script,
            state: self.state.clone(),
            catalog: self.catalog.clone(),
            notifier: self.notifier.clone(),
            event_tx: self.event_tx.clone(),
            cancel_token: cancel_token.clone(),
        };
        let handle = tokio::spawn(worker.run(schedule));

        *active = Some(ActiveRun {
            run_id,
            cancel_token,
            handle: Some(handle),
        });
        StartOutcome::Started(run_id)
    }

    /// Read-only copy of the current run.
    pub async fn snapshot(&self) -> SearchRun {
        self.state.read().await.clone()
    }

    pub async fn status(&self) -> RunStatus {
        self.state.read().await.status
    }

    /// Wait until the current run has played every task, reveals included.
    /// Returns immediately when nothing is scheduled or another caller is
    /// already waiting on the same run.
    pub async fn wait(&self) {
        let handle = self
            .active
            .lock()
            .await
            .as_mut()
            .and_then(|run| run.handle.take());
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }
}

fn emit(tx: &Option<mpsc::UnboundedSender<SequencerEvent>>, event: SequencerEvent) {
    if let Some(tx) = tx {
        let _ = tx.send(event);
    }
}

/// Scheduler loop for one run. Owns clones of everything it touches so the
/// spawned task is `'static`.
struct RunWorker {
    run_id: Uuid,
    query: String,
    script: Script,
    state: Arc<RwLock<SearchRun>>,
    catalog: Arc<dyn CatalogProvider>,
    notifier: Arc<dyn NotificationSink>,
    event_tx: Option<mpsc::UnboundedSender<SequencerEvent>>,
    cancel_token: CancellationToken,
}

impl RunWorker {
    async fn run(self, schedule: Schedule) {
        let started = Instant::now();
        for scheduled in schedule.tasks() {
            tokio::select! {
                biased;
                _ = self.cancel_token.cancelled() => {
                    debug!(run_id = %self.run_id, "Run superseded, dropping pending tasks");
                    return;
                }
                _ = tokio::time::sleep_until(started + scheduled.at) => {}
            }
            if !self.apply(scheduled.task).await {
                return;
            }
        }
        debug!(run_id = %self.run_id, "Run schedule exhausted");
    }

    /// Apply one task. Returns false once this run is no longer current.
    async fn apply(&self, task: Task) -> bool {
        let mut state = self.state.write().await;
        if state.run_id != Some(self.run_id) || self.cancel_token.is_cancelled() {
            return false;
        }

        match task {
            Task::Emit(index) => {
                let step = &self.script.steps()[index];
                let event = StreamEvent::new(step.kind, step.message.clone(), step.detail.clone());
                let percent = self.script.progress_after(index).max(state.progress_percent);
                state.events.push(event.clone());
                state.progress_percent = percent;
                debug!(run_id = %self.run_id, step = index + 1, progress = percent, message = %event.message, "Step emitted");
                emit(&self.event_tx, SequencerEvent::Stream(event));
                emit(&self.event_tx, SequencerEvent::Progress { percent });
            }
            Task::RevealResults => {
                state.results = self.catalog.results(&self.query);
                let count = state.results.len();
                debug!(run_id = %self.run_id, count, "Results revealed");
                emit(&self.event_tx, SequencerEvent::ResultsRevealed { count });
            }
            Task::Complete => {
                state.status = RunStatus::Completed;
                state.completed_at = Some(Utc::now());
                let event_count = state.events.len();
                info!(
                    run_id = %self.run_id,
                    events = event_count,
                    elapsed_ms = state.elapsed_ms(),
                    "Search run completed"
                );
                emit(&self.event_tx, SequencerEvent::RunCompleted {
                    run_id: self.run_id,
                    event_count,
                });
                self.notifier
                    .notify(Notification::search_complete(self.catalog.result_count(&self.query)));
            }
            Task::RevealSummary => {
                state.summary = Some(self.catalog.summary(&self.query));
                debug!(run_id = %self.run_id, "Summary revealed");
                emit(&self.event_tx, SequencerEvent::SummaryRevealed);
            }
        }
        true
    }
}
