pub mod routes;
pub mod models;
pub mod errors;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::notify::MemoryNotifier;
use crate::sequencer::SearchSequencer;

#[derive(Clone)]
pub struct AppState {
    pub sequencer: SearchSequencer,
    pub notifications: MemoryNotifier,
}

impl AppState {
    /// `notifications` must be the sink the sequencer was built with.
    pub fn new(sequencer: SearchSequencer, notifications: MemoryNotifier) -> Self {
        Self { sequencer, notifications }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/search", axum::routing::post(routes::search::start_search).get(routes::search::get_search))
        .route("/api/search/events", axum::routing::get(routes::search::get_events))
        .route("/api/search/results", axum::routing::get(routes::search::get_results))
        .route("/api/search/summary", axum::routing::get(routes::search::get_summary))
        .route("/api/notifications", axum::routing::get(routes::notifications::list_notifications))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
