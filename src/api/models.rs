use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sequencer::RunStatus;

#[derive(Deserialize)]
pub struct StartSearchRequest {
    pub query: String,
}

#[derive(Serialize)]
pub struct StartSearchResponse {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    pub status: RunStatus,
    pub query: String,
}

#[derive(Deserialize, Default)]
pub struct EventsQuery {
    pub since: Option<usize>,
}
