use std::sync::Arc;

use tracing::info;

use crate::api::{self, AppState};
use crate::cli::commands::ServeArgs;
use crate::errors::BrowseEaseError;
use crate::notify::MemoryNotifier;
use crate::sequencer::{Pacing, SearchSequencer};

use super::setup;

pub async fn handle_serve(args: ServeArgs, config_path: Option<&str>) -> Result<(), BrowseEaseError> {
    let runtime = setup::load(config_path).await?;
    let server = runtime.config.server();
    let host = args.host.unwrap_or(server.host);
    let port = args.port.unwrap_or(server.port);

    let notifications = MemoryNotifier::new();
    let sequencer = SearchSequencer::new(
        runtime.catalog,
        Arc::new(notifications.clone()),
        Pacing::from(&runtime.config.sequencer()),
    );
    let app = api::build_router(AppState::new(sequencer, notifications));

    let addr = format!("{}:{}", host, port);
    info!(host = %host, port, "Starting API server");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BrowseEaseError::Server(format!("Failed to bind {}: {}", addr, e)))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| BrowseEaseError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
