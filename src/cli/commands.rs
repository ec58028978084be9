use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "browseease", version, about = "AI shopping assistant search simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive search box
    Start,
    /// Run one search headless and print the results
    Search(SearchArgs),
    /// Start the HTTP REST API server
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct SearchArgs {
    /// What to shop for
    pub query: String,

    /// Print the final run as JSON instead of the live stream
    #[arg(long)]
    pub json: bool,

    /// Base delay between steps, overrides the config file
    #[arg(long)]
    pub step_delay_ms: Option<u64>,

    /// Maximum random extra delay per step, overrides the config file
    #[arg(long)]
    pub jitter_ms: Option<u64>,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_with_overrides() {
        let cli = Cli::try_parse_from([
            "browseease", "-v", "search", "gaming laptop", "--json", "--step-delay-ms", "0",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.query, "gaming laptop");
                assert!(args.json);
                assert_eq!(args.step_delay_ms, Some(0));
                assert_eq!(args.jitter_ms, None);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "browseease", "serve", "--port", "9000", "--config", "b.yaml", "--log-format", "json",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("b.yaml"));
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(matches!(cli.command, Commands::Serve(ServeArgs { port: Some(9000), .. })));
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["browseease", "search"]).is_err());
    }
}
