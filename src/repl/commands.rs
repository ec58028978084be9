/// All slash commands supported by the REPL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Search {
        query: String,
    },
    Status,
    Events,
    Results,
    Summary,
    Suggest,
    Version,
    Clear,
    Help {
        command: Option<String>,
    },
    Exit,
}

/// A line typed at the prompt: either a bare query or a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Query(String),
    Command(SlashCommand),
}

/// Description of a command for help display.
pub struct CommandHelp {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "search",
        usage: "/search <query>",
        description: "Start a search (same as typing the query without a slash)",
    },
    CommandHelp {
        name: "status",
        usage: "/status",
        description: "Show the current run's status and progress",
    },
    CommandHelp {
        name: "events",
        usage: "/events",
        description: "Replay the live stream of the current run",
    },
    CommandHelp {
        name: "results",
        usage: "/results",
        description: "Show the ranked product results",
    },
    CommandHelp {
        name: "summary",
        usage: "/summary",
        description: "Show the AI summary and recommendations",
    },
    CommandHelp {
        name: "suggest",
        usage: "/suggest",
        description: "List example searches",
    },
    CommandHelp {
        name: "version",
        usage: "/version",
        description: "Show version and build info",
    },
    CommandHelp {
        name: "clear",
        usage: "/clear",
        description: "Clear the terminal screen",
    },
    CommandHelp {
        name: "help",
        usage: "/help [command]",
        description: "Show help for all or a specific command",
    },
    CommandHelp {
        name: "exit",
        usage: "/exit",
        description: "Quit the REPL",
    },
];

/// All command names for tab completion.
pub static COMMAND_NAMES: &[&str] = &[
    "/search",
    "/status",
    "/events",
    "/results",
    "/summary",
    "/suggest",
    "/version",
    "/clear",
    "/help",
    "/exit",
];

pub static SUGGESTIONS: &[&str] = &[
    "Best smartphones under ₹30k",
    "Gaming laptops 2024",
    "Wireless earbuds comparison",
    "4K TVs under ₹50k",
];

/// Classify a non-empty input line.
pub fn parse_input(input: &str) -> Result<ReplInput, String> {
    let input = input.trim();
    if input.starts_with('/') {
        parse_command(input).map(ReplInput::Command)
    } else {
        Ok(ReplInput::Query(input.to_string()))
    }
}

/// Parse a raw input line into a SlashCommand, or return an error message.
pub fn parse_command(input: &str) -> Result<SlashCommand, String> {
    let input = input.trim();
    if !input.starts_with('/') {
        return Err("Commands must start with /. Type /help for available commands.".into());
    }

    let (cmd, rest) = match input.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (input, ""),
    };

    match cmd {
        "/search" | "/s" => {
            if rest.is_empty() {
                Err("Usage: /search <query>".into())
            } else {
                Ok(SlashCommand::Search { query: rest.to_string() })
            }
        }
        "/status" => Ok(SlashCommand::Status),
        "/events" => Ok(SlashCommand::Events),
        "/results" => Ok(SlashCommand::Results),
        "/summary" => Ok(SlashCommand::Summary),
        "/suggest" => Ok(SlashCommand::Suggest),
        "/version" => Ok(SlashCommand::Version),
        "/clear" => Ok(SlashCommand::Clear),
        "/help" => Ok(SlashCommand::Help {
            command: rest
                .split_whitespace()
                .next()
                .map(|s| s.trim_start_matches('/').to_string()),
        }),
        "/exit" | "/quit" | "/q" => Ok(SlashCommand::Exit),
        other => Err(format!("Unknown command: {}. Type /help for available commands.", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_query() {
        assert_eq!(
            parse_input("  gaming laptop ").unwrap(),
            ReplInput::Query("gaming laptop".into())
        );
    }

    #[test]
    fn test_search_keeps_full_query() {
        assert_eq!(
            parse_command("/search 4K TVs under ₹50k").unwrap(),
            SlashCommand::Search { query: "4K TVs under ₹50k".into() }
        );
    }

    #[test]
    fn test_search_without_query_is_error() {
        assert!(parse_command("/search").is_err());
        assert!(parse_command("/search    ").is_err());
    }

    #[test]
    fn test_help_with_topic() {
        assert_eq!(
            parse_command("/help /results").unwrap(),
            SlashCommand::Help { command: Some("results".into()) }
        );
        assert_eq!(parse_command("/help").unwrap(), SlashCommand::Help { command: None });
    }

    #[test]
    fn test_exit_aliases() {
        for alias in ["/exit", "/quit", "/q"] {
            assert_eq!(parse_command(alias).unwrap(), SlashCommand::Exit);
        }
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_command("/scan").unwrap_err();
        assert!(err.contains("Unknown command"));
    }

    #[test]
    fn test_every_help_entry_has_a_completion() {
        for help in COMMAND_HELP {
            assert!(COMMAND_NAMES.contains(&format!("/{}", help.name).as_str()));
        }
    }
}
