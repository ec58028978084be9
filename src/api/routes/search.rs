use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::api::models::{EventsQuery, StartSearchRequest, StartSearchResponse};
use crate::api::AppState;
use crate::errors::BrowseEaseError;
use crate::sequencer::StartOutcome;

/// Rejected starts answer 200 with `accepted: false`; they are not errors.
/// A malformed body is a 400 in the usual `{"error": ...}` shape.
pub async fn start_search(
    State(state): State<AppState>,
    body: Result<Json<StartSearchRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StartSearchResponse>), BrowseEaseError> {
    let Json(req) = body.map_err(|e| BrowseEaseError::Config(format!("Invalid search request: {}", e.body_text())))?;
    let outcome = state.sequencer.start(&req.query).await;
    let run = state.sequencer.snapshot().await;

    let (code, run_id) = match outcome {
        StartOutcome::Started(id) => {
            info!(run_id = %id, query = %run.query, "Search started via API");
            (StatusCode::ACCEPTED, Some(id))
        }
        _ => (StatusCode::OK, None),
    };

    Ok((
        code,
        Json(StartSearchResponse {
            accepted: outcome.is_started(),
            run_id,
            reason: outcome.reason(),
            status: run.status,
            query: run.query,
        }),
    ))
}

pub async fn get_search(State(state): State<AppState>) -> Result<Json<Value>, BrowseEaseError> {
    let run = state.sequencer.snapshot().await;
    Ok(Json(serde_json::to_value(&run)?))
}

pub async fn get_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Json<Value> {
    let run = state.sequencer.snapshot().await;
    let since = query.since.unwrap_or(0).min(run.events.len());
    Json(json!({
        "run_id": run.run_id,
        "status": run.status,
        "progress_percent": run.progress_percent,
        "total": run.events.len(),
        "events": &run.events[since..],
    }))
}

pub async fn get_results(State(state): State<AppState>) -> Json<Value> {
    let run = state.sequencer.snapshot().await;
    Json(json!({ "run_id": run.run_id, "total": run.results.len(), "results": run.results }))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<Value> {
    let run = state.sequencer.snapshot().await;
    Json(json!({ "run_id": run.run_id, "summary": run.summary }))
}
