use std::sync::Arc;
use std::time::Duration;

use console::style;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor, ExternalPrinter as _};
use tokio::sync::mpsc;

use crate::catalog::CatalogProvider;
use crate::errors::BrowseEaseError;
use crate::notify::EventNotifier;
use crate::repl::banner;
use crate::repl::commands::{self, ReplInput, SlashCommand};
use crate::repl::completer::ReplHelper;
use crate::repl::progress::SearchProgress;
use crate::repl::renderer;
use crate::sequencer::{Pacing, RunStatus, SearchSequencer, SequencerEvent, StartOutcome};

/// Interactive search session: one sequencer, one prompt.
pub struct ReplSession {
    sequencer: SearchSequencer,
    event_rx: mpsc::UnboundedReceiver<SequencerEvent>,
}

impl ReplSession {
    pub fn new(catalog: Arc<dyn CatalogProvider>, pacing: Pacing) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<SequencerEvent>();
        let notifier = Arc::new(EventNotifier::new(event_tx.clone()));
        let sequencer = SearchSequencer::new(catalog, notifier, pacing).with_event_channel(event_tx);
        Self { sequencer, event_rx }
    }

    pub async fn run(self) -> Result<(), BrowseEaseError> {
        let Self { sequencer, mut event_rx } = self;
        banner::show_splash();

        let config = Config::builder().auto_add_history(true).build();
        let mut editor = Editor::with_config(config)
            .map_err(|e| BrowseEaseError::Internal(format!("Failed to initialize REPL: {}", e)))?;
        editor.set_helper(Some(ReplHelper));

        // Prints reveals and toasts that arrive while the prompt is showing
        let printer = editor
            .create_external_printer()
            .map_err(|e| BrowseEaseError::Internal(format!("Failed to create printer: {}", e)))?;
        let printer = Arc::new(tokio::sync::Mutex::new(printer));

        // Ctrl-C while waiting hides the bar before the prompt comes back
        let (detach_tx, mut detach_rx) = mpsc::unbounded_channel::<()>();

        let printer_clone = printer.clone();
        let event_task = tokio::spawn(async move {
            let mut progress = SearchProgress::new();
            loop {
                let event = tokio::select! {
                    Some(()) = detach_rx.recv() => {
                        progress.detach();
                        continue;
                    }
                    event = event_rx.recv() => match event {
                        Some(event) => event,
                        None => break,
                    },
                };
                progress.handle_event(&event);
                let Some(line) = renderer::render_event(&event) else {
                    continue;
                };
                if progress.is_active() {
                    progress.println(&line);
                } else {
                    let mut p = printer_clone.lock().await;
                    let _ = p.print(format!("{}\n", line));
                }
            }
        });

        loop {
            // Readline's raw mode fights the progress bar redraws, so the
            // prompt is withheld until the steps have played out or the bar
            // has been detached by Ctrl-C.
            if sequencer.status().await == RunStatus::Running {
                loop {
                    tokio::select! {
                        _ = tokio::time::sleep(Duration::from_millis(200)) => {
                            if sequencer.status().await != RunStatus::Running {
                                break;
                            }
                        }
                        result = tokio::signal::ctrl_c() => {
                            if result.is_ok() {
                                let _ = detach_tx.send(());
                                println!(
                                    "\n{}",
                                    renderer::render_info("Stopped watching; the search keeps running (/status)")
                                );
                                break;
                            }
                        }
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }

            let readline = {
                let result = tokio::task::spawn_blocking(move || {
                    let term_w = console::Term::stdout().size().1 as usize;
                    let sep = format!("{}", style("─".repeat(term_w)).dim());
                    let prompt = format!("{}\n{} ", sep, style("browseease>").cyan().bold());
                    let result = editor.readline(&prompt);
                    (editor, result)
                })
                .await
                .map_err(|e| BrowseEaseError::Internal(format!("Readline task failed: {}", e)))?;

                editor = result.0;
                result.1
            };

            match readline {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    match commands::parse_input(trimmed) {
                        Ok(ReplInput::Query(query)) => start_search(&sequencer, &query).await,
                        Ok(ReplInput::Command(cmd)) => {
                            if handle_command(cmd, &sequencer).await {
                                break;
                            }
                        }
                        Err(msg) => println!("{}", renderer::render_error(&msg)),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    println!("{}", renderer::render_error(&format!("Input error: {}", err)));
                    break;
                }
            }
        }

        // The sequencer's sender clones keep the channel open, so stop the
        // renderer directly.
        event_task.abort();
        let _ = event_task.await;

        println!("{}", renderer::render_info("Goodbye."));
        Ok(())
    }
}

async fn start_search(sequencer: &SearchSequencer, query: &str) {
    match sequencer.start(query).await {
        StartOutcome::Started(_) => {}
        StartOutcome::EmptyQuery => {
            println!("{}", renderer::render_error("Type something to search for."));
        }
        StartOutcome::AlreadyRunning => {
            println!(
                "{}",
                renderer::render_error("A search is already running. Use /status to follow it.")
            );
        }
    }
}

/// Returns true when the session should end.
async fn handle_command(cmd: SlashCommand, sequencer: &SearchSequencer) -> bool {
    match cmd {
        SlashCommand::Exit => return true,
        SlashCommand::Search { query } => start_search(sequencer, &query).await,
        SlashCommand::Status => {
            println!("{}", renderer::render_status(&sequencer.snapshot().await));
        }
        SlashCommand::Events => {
            println!("{}", renderer::render_event_log(&sequencer.snapshot().await.events));
        }
        SlashCommand::Results => {
            println!("{}", renderer::render_results(&sequencer.snapshot().await.results));
        }
        SlashCommand::Summary => {
            let run = sequencer.snapshot().await;
            println!("{}", renderer::render_summary(run.summary.as_ref()));
        }
        SlashCommand::Suggest => println!("{}", renderer::render_suggestions()),
        SlashCommand::Version => println!("{}", renderer::render_version()),
        SlashCommand::Clear => print!("\x1B[2J\x1B[1;1H"),
        SlashCommand::Help { command } => {
            println!("{}", renderer::render_help(command.as_deref()));
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FixtureCatalog;

    fn sequencer() -> SearchSequencer {
        let notifier = Arc::new(crate::notify::MemoryNotifier::new());
        SearchSequencer::new(Arc::new(FixtureCatalog::builtin()), notifier, Pacing::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_command_starts_run() {
        let seq = sequencer();
        let exit = handle_command(SlashCommand::Search { query: "4K TVs".into() }, &seq).await;
        assert!(!exit);
        let run = seq.snapshot().await;
        assert_eq!(run.status, RunStatus::Running);
        assert_eq!(run.query, "4K TVs");
    }

    #[tokio::test(start_paused = true)]
    async fn test_exit_command_ends_session() {
        assert!(handle_command(SlashCommand::Exit, &sequencer()).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_commands_do_not_touch_state() {
        let seq = sequencer();
        for cmd in [SlashCommand::Status, SlashCommand::Results, SlashCommand::Summary, SlashCommand::Events] {
            assert!(!handle_command(cmd, &seq).await);
        }
        assert_eq!(seq.status().await, RunStatus::Idle);
    }
}
