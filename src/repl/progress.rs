use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::sequencer::SequencerEvent;
use crate::utils::formatting::format_duration;

/// Live percent bar shown while a search run is playing back.
pub struct SearchProgress {
    multi: MultiProgress,
    bar: Option<ProgressBar>,
    started: std::time::Instant,
}

impl SearchProgress {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bar: None,
            started: std::time::Instant::now(),
        }
    }

    /// Update the bar for an event. Text output is left to the caller.
    pub fn handle_event(&mut self, event: &SequencerEvent) {
        match event {
            SequencerEvent::RunStarted { .. } => {
                if let Some(bar) = self.bar.take() {
                    bar.abandon_with_message("Superseded");
                }
                let bar = self.multi.add(ProgressBar::new(100));
                bar.set_style(
                    ProgressStyle::default_bar()
                        .template("  {spinner:.cyan} {bar:30.cyan/dark_gray} {pos:>3}% | {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar())
                        .progress_chars("█▓░"),
                );
                bar.set_message("Starting...");
                bar.enable_steady_tick(Duration::from_millis(120));
                self.bar = Some(bar);
                self.started = std::time::Instant::now();
            }
            SequencerEvent::Stream(stream) => {
                if let Some(bar) = &self.bar {
                    bar.set_message(stream.message.clone());
                }
            }
            SequencerEvent::Progress { percent } => {
                if let Some(bar) = &self.bar {
                    bar.set_position(u64::from(*percent));
                }
            }
            SequencerEvent::RunCompleted { event_count, .. } => {
                if let Some(bar) = self.bar.take() {
                    bar.finish_with_message(format!(
                        "Search complete: {} updates in {}",
                        event_count,
                        format_duration(self.started.elapsed().as_millis() as u64),
                    ));
                }
            }
            _ => {}
        }
    }

    /// Drop the bar without waiting for the run to finish. Later events of
    /// the same run leave the bar hidden; the next `RunStarted` shows a new one.
    pub fn detach(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Print a line through the multi-progress so it lands above the bar.
    pub fn println(&self, msg: &str) {
        let _ = self.multi.println(msg);
    }
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}
