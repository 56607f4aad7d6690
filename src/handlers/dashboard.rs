use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::entities::dashboard_config;
use crate::error::{reject, ApiError};
use crate::models::dashboard::DashboardConfigCreate;
use crate::services::dashboard::create_dashboard_config;
use crate::AppState;

/// POST /api/dashboard-configs
pub async fn create_config(
    State(state): State<AppState>,
    Json(payload): Json<DashboardConfigCreate>,
) -> Result<(StatusCode, Json<dashboard_config::Model>), ApiError> {
    let correlation_id = uuid::Uuid::new_v4().to_string();
    info!(
        correlation_id = %correlation_id,
        config_name = %payload.config_name,
        "Create dashboard config request"
    );

    let saved = create_dashboard_config(&state.db, payload)
        .await
        .map_err(|e| reject(&correlation_id, e))?;

    Ok((StatusCode::CREATED, Json(saved)))
}
