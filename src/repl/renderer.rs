use console::style;

use crate::models::{EventKind, ProductResult, StreamEvent, SummaryReport};
use crate::notify::Notification;
use crate::repl::commands::{CommandHelp, COMMAND_HELP, SUGGESTIONS};
use crate::sequencer::{RunStatus, SearchRun, SequencerEvent};
use crate::utils::formatting::{format_count, format_duration, truncate};

/// Render a sequencer event as styled terminal output. Returns `None` for
/// events that are shown by the progress bar instead.
pub fn render_event(event: &SequencerEvent) -> Option<String> {
    match event {
        SequencerEvent::RunStarted { query, .. } => Some(format!(
            "\n{} AI agent searching for {}",
            style("▶").green().bold(),
            style(query).white().bold(),
        )),
        SequencerEvent::Stream(event) => Some(render_stream_event(event)),
        SequencerEvent::ResultsRevealed { count } => Some(format!(
            "  {} {} results ready (/results)",
            style("★").cyan(),
            count,
        )),
        SequencerEvent::SummaryRevealed => Some(format!(
            "  {} AI summary ready (/summary)",
            style("✦").magenta(),
        )),
        SequencerEvent::Notification(notification) => Some(render_notification(notification)),
        SequencerEvent::Progress { .. } | SequencerEvent::RunCompleted { .. } => None,
    }
}

fn kind_icon(kind: EventKind) -> String {
    match kind {
        EventKind::Success => style("✓").green().to_string(),
        EventKind::Warning => style("⚠").yellow().to_string(),
        EventKind::Error => style("✗").red().to_string(),
        EventKind::Progress => style("⟳").cyan().to_string(),
        EventKind::Info => style("●").cyan().to_string(),
    }
}

/// Render a kind badge with appropriate colors.
pub fn render_kind_badge(kind: EventKind) -> String {
    let label = format!(" {} ", kind.badge());
    match kind {
        EventKind::Success => style(label).green().bold().to_string(),
        EventKind::Warning => style(label).yellow().bold().to_string(),
        EventKind::Error => style(label).on_red().white().bold().to_string(),
        EventKind::Progress => style(label).cyan().to_string(),
        EventKind::Info => style(label).dim().to_string(),
    }
}

pub fn render_stream_event(event: &StreamEvent) -> String {
    let mut out = format!(
        "  {} {} {} {}",
        kind_icon(event.kind),
        style(&event.message).white().bold(),
        render_kind_badge(event.kind),
        style(event.timestamp.with_timezone(&chrono::Local).format("%H:%M:%S")).dim(),
    );
    if let Some(ref detail) = event.detail {
        out.push_str(&format!("\n      {}", style(detail).dim()));
    }
    out
}

pub fn render_notification(notification: &Notification) -> String {
    format!(
        "\n  {} {}\n    {}\n",
        style("🔔").yellow(),
        style(&notification.title).green().bold(),
        notification.description,
    )
}

/// Render the full event log of a run.
pub fn render_event_log(events: &[StreamEvent]) -> String {
    if events.is_empty() {
        return format!(
            "\n  {}\n  {}\n",
            style("Waiting for search query...").dim(),
            style("The AI agent will show real-time updates here").dim(),
        );
    }
    let mut out = format!("\n{}\n\n", style(format!("Live stream ({}):", events.len())).white().bold());
    for event in events {
        out.push_str(&render_stream_event(event));
        out.push('\n');
    }
    out
}

/// Render the ranked results table.
pub fn render_results(results: &[ProductResult]) -> String {
    if results.is_empty() {
        return format!("\n  {}\n", style("No results yet.").dim());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "\n{}  {}\n\n",
        style("Top Recommendations").white().bold(),
        style(format!("{} products found across multiple platforms", results.len())).dim(),
    ));

    for (idx, product) in results.iter().enumerate() {
        let price = match product.original_price {
            Some(ref original) => format!(
                "{} {}",
                style(&product.price).green().bold(),
                style(original).dim().strikethrough(),
            ),
            None => style(&product.price).green().bold().to_string(),
        };
        let rating = match (product.rating, product.reviews) {
            (Some(r), Some(n)) => format!("★ {:.1} ({})", r, format_count(n)),
            (Some(r), None) => format!("★ {:.1}", r),
            _ => String::new(),
        };
        let pick = if product.is_top_pick {
            format!(" {}", style(" TOP PICK ").on_yellow().black().bold())
        } else {
            String::new()
        };

        out.push_str(&format!(
            "  {} {}{}\n",
            style(format!("#{}", idx + 1)).cyan().bold(),
            style(truncate(&product.name, 56)).white().bold(),
            pick,
        ));
        out.push_str(&format!(
            "     {}  {}  {}  {}\n",
            style(&product.source).cyan(),
            price,
            style(format!("AI score {:.1}/10", product.score)).magenta(),
            style(rating).yellow(),
        ));
        if !product.specs.is_empty() {
            let specs: Vec<&str> = product.specs.iter().take(4).map(String::as_str).collect();
            out.push_str(&format!("     {}\n", style(specs.join(" · ")).dim()));
        }
    }
    out
}

/// Render the AI summary panel.
pub fn render_summary(summary: Option<&SummaryReport>) -> String {
    let Some(summary) = summary else {
        return format!("\n  {}\n", style("Summary not available yet.").dim());
    };

    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", style("AI Analysis & Recommendations").white().bold()));
    out.push_str(&format!("  {}\n  {}\n", style("Our Recommendation").green().bold(), summary.recommendation));

    if !summary.key_insights.is_empty() {
        out.push_str(&format!("\n  {}\n", style("Key Market Insights").cyan().bold()));
        for insight in &summary.key_insights {
            out.push_str(&format!("    {} {}\n", style("•").cyan(), insight));
        }
    }

    out.push_str(&format!(
        "\n  {}\n    {} {}   {} {}   {} {}\n",
        style("Price Analysis").cyan().bold(),
        style("Lowest:").dim(),
        style(&summary.price_range.min).green(),
        style("Average:").dim(),
        style(&summary.price_range.average).white(),
        style("Highest:").dim(),
        style(&summary.price_range.max).red(),
    ));

    if !summary.top_brands.is_empty() {
        out.push_str(&format!(
            "\n  {}\n    {}\n",
            style("Top Brands").cyan().bold(),
            summary.top_brands.join(" · "),
        ));
    }

    if !summary.considerations.is_empty() {
        out.push_str(&format!("\n  {}\n", style("Things to Consider").yellow().bold()));
        for item in &summary.considerations {
            out.push_str(&format!("    {} {}\n", style("!").yellow(), item));
        }
    }
    out
}

/// Render the current run status.
pub fn render_status(run: &SearchRun) -> String {
    let status = match run.status {
        RunStatus::Running => style(run.status.as_str()).green().bold().to_string(),
        RunStatus::Completed => style(run.status.as_str()).cyan().to_string(),
        RunStatus::Idle => style(run.status.as_str()).white().to_string(),
    };
    let query = if run.query.is_empty() { "none" } else { run.query.as_str() };
    format!(
        "\n  {} {}\n  {} {}\n  {} {}%\n  {} {}\n  {} {}\n  {} {}\n",
        style("Status:").dim(),
        status,
        style("Query:").dim(),
        style(query).white(),
        style("Progress:").dim(),
        run.progress_percent,
        style("Events:").dim(),
        run.events.len(),
        style("Results:").dim(),
        run.results.len(),
        style("Elapsed:").dim(),
        style(format_duration(run.elapsed_ms())).white(),
    )
}

pub fn render_suggestions() -> String {
    let mut out = format!("\n{}\n\n", style("Try one of these:").white().bold());
    for s in SUGGESTIONS {
        out.push_str(&format!("  {} {}\n", style("✧").cyan(), s));
    }
    out
}

/// Render the help listing for all commands.
pub fn render_help(specific_command: Option<&str>) -> String {
    if let Some(cmd_name) = specific_command {
        if let Some(cmd) = COMMAND_HELP.iter().find(|c| c.name == cmd_name) {
            return format_command_detail(cmd);
        } else {
            return format!("{} Unknown command: /{}", style("✗").red(), cmd_name);
        }
    }

    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", style("Available commands:").white().bold()));
    for cmd in COMMAND_HELP {
        out.push_str(&format!(
            "  {:<16} {}\n",
            style(format!("/{}", cmd.name)).cyan().bold(),
            style(cmd.description).dim(),
        ));
    }
    out.push_str(&format!(
        "\n  {}\n",
        style("Anything that does not start with / is searched directly.").dim(),
    ));
    out
}

fn format_command_detail(cmd: &CommandHelp) -> String {
    format!(
        "\n{}\n  {}\n\n  {}\n",
        style(format!("/{}", cmd.name)).cyan().bold(),
        style(cmd.description).dim(),
        style(cmd.usage).white(),
    )
}

/// Render the version info.
pub fn render_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");
    let build_ts = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown");

    format!(
        "\n  {} {}\n  {} {}\n  {} {}\n",
        style("Version:").dim(),
        style(version).white().bold(),
        style("Commit:").dim(),
        style(git_hash).white(),
        style("Built:").dim(),
        style(build_ts).white(),
    )
}

/// Print an error message to the REPL.
pub fn render_error(msg: &str) -> String {
    format!("{} {}", style("✗").red(), style(msg).red())
}

/// Print an info message.
pub fn render_info(msg: &str) -> String {
    format!("{}", style(msg).dim())
}
