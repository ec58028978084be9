use browseease::cli::{self, Commands, LogFormat};
use browseease::config;
use browseease::errors::BrowseEaseError;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    match cli.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(!cli.no_color)
            .init(),
    }
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Start => cli::start::handle_start(config_path).await,
        Commands::Search(args) => cli::search::handle_search(args, config_path).await,
        Commands::Serve(args) => cli::serve::handle_serve(args, config_path).await,
        Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        let class = e.classify();
        error!(error_type = class.error_type, "{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(class.exit_code);
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), BrowseEaseError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
