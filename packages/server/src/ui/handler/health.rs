//! Health check endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use tayori_shared::time::{get_utc_timestamp, timestamp_to_rfc3339};

use crate::{infrastructure::dto::http::HealthDto, ui::state::AppState};

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
        timestamp: timestamp_to_rfc3339(get_utc_timestamp()),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}
