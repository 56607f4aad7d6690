use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::entities::eia_data_points;
use crate::error::{reject, ApiError};
use crate::models::data_point::EiaDataPointCreate;
use crate::services::data_points::record_data_point;
use crate::AppState;

/// POST /api/data-points
pub async fn create_data_point(
    State(state): State<AppState>,
    Json(payload): Json<EiaDataPointCreate>,
) -> Result<(StatusCode, Json<eia_data_points::Model>), ApiError> {
    let correlation_id = uuid::Uuid::new_v4().to_string();
    info!(
        correlation_id = %correlation_id,
        series_id = %payload.series_id,
        data_source = %payload.data_source,
        "Create data point request"
    );

    let saved = record_data_point(&state.db, payload)
        .await
        .map_err(|e| reject(&correlation_id, e))?;

    Ok((StatusCode::CREATED, Json(saved)))
}
