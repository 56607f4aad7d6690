use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::entities::data_alerts;
use crate::error::{reject, ApiError};
use crate::services::alerts::record_trigger;
use crate::AppState;

/// POST /api/alerts/{id}/trigger
pub async fn trigger_alert(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<data_alerts::Model>, ApiError> {
    let correlation_id = uuid::Uuid::new_v4().to_string();
    info!(correlation_id = %correlation_id, alert_id = id, "Trigger alert request");

    let alert = record_trigger(&state.db, id)
        .await
        .map_err(|e| reject(&correlation_id, e))?;

    Ok(Json(alert))
}
