use axum::{extract::State, Json};
use serde_json::{json, Value};
use crate::api::AppState;

pub async fn list_notifications(State(state): State<AppState>) -> Json<Value> {
    let delivered = state.notifications.delivered();
    Json(json!({ "total": delivered.len(), "notifications": delivered }))
}
