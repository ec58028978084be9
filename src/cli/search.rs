use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use crate::cli::commands::SearchArgs;
use crate::config::{self, SequencerConfig};
use crate::errors::BrowseEaseError;
use crate::notify::{EventNotifier, LogNotifier};
use crate::repl::progress::SearchProgress;
use crate::repl::renderer;
use crate::sequencer::{Pacing, SearchSequencer, SequencerEvent, StartOutcome};

use super::setup;

pub async fn handle_search(args: SearchArgs, config_path: Option<&str>) -> Result<(), BrowseEaseError> {
    let runtime = setup::load(config_path).await?;

    let pacing = pacing_with_overrides(&args, runtime.config.sequencer())?;

    if args.json {
        let sequencer = SearchSequencer::new(runtime.catalog, Arc::new(LogNotifier), pacing);
        ensure_started(sequencer.start(&args.query).await)?;
        sequencer.wait().await;
        let run = sequencer.snapshot().await;
        println!("{}", serde_json::to_string_pretty(&run)?);
        return Ok(());
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<SequencerEvent>();
    let notifier = Arc::new(EventNotifier::new(event_tx.clone()));
    let sequencer = SearchSequencer::new(runtime.catalog, notifier, pacing).with_event_channel(event_tx);

    let render_task = tokio::spawn(async move {
        let mut progress = SearchProgress::new();
        while let Some(event) = event_rx.recv().await {
            progress.handle_event(&event);
            if let Some(line) = renderer::render_event(&event) {
                if progress.is_active() {
                    progress.println(&line);
                } else {
                    println!("{}", line);
                }
            }
        }
    });

    ensure_started(sequencer.start(&args.query).await)?;
    sequencer.wait().await;
    let run = sequencer.snapshot().await;

    // Closes the channel so the renderer drains and exits
    drop(sequencer);
    let _ = render_task.await;

    println!("{}", renderer::render_results(&run.results));
    println!("{}", renderer::render_summary(run.summary.as_ref()));
    info!(query = %run.query, events = run.events.len(), elapsed_ms = run.elapsed_ms(), "Search finished");
    Ok(())
}

/// Apply `--step-delay-ms` / `--jitter-ms` and re-check the delay limits.
fn pacing_with_overrides(args: &SearchArgs, mut seq_config: SequencerConfig) -> Result<Pacing, BrowseEaseError> {
    if let Some(ms) = args.step_delay_ms {
        seq_config.step_delay_ms = ms;
    }
    if let Some(ms) = args.jitter_ms {
        seq_config.jitter_ms = ms;
    }
    config::validate_delays(&seq_config)?;
    Ok(Pacing::from(&seq_config))
}

fn ensure_started(outcome: StartOutcome) -> Result<(), BrowseEaseError> {
    match outcome {
        StartOutcome::Started(_) => Ok(()),
        StartOutcome::EmptyQuery => Err(BrowseEaseError::Config("Search query must not be empty".into())),
        // A fresh sequencer is never busy
        StartOutcome::AlreadyRunning => Err(BrowseEaseError::Internal("Sequencer already running".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn args(step_delay_ms: Option<u64>, jitter_ms: Option<u64>) -> SearchArgs {
        SearchArgs {
            query: "q".into(),
            json: true,
            step_delay_ms,
            jitter_ms,
        }
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let pacing = pacing_with_overrides(&args(Some(0), Some(0)), SequencerConfig::default()).unwrap();
        assert_eq!(pacing.step_delay, Duration::ZERO);
        assert_eq!(pacing.jitter, Duration::ZERO);
        assert_eq!(pacing.summary_reveal, Duration::from_millis(800));
    }

    #[test]
    fn test_overrides_respect_delay_limit() {
        let err = pacing_with_overrides(&args(Some(3_600_000), None), SequencerConfig::default()).unwrap_err();
        assert_eq!(err.classify().exit_code, 2);
        assert!(err.to_string().contains("step_delay_ms"));

        assert!(pacing_with_overrides(&args(None, Some(60_001)), SequencerConfig::default()).is_err());
    }
}
