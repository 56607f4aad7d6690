//! Scenario endpoints
//!
//! POST   /api/scenarios
//! GET    /api/scenarios/{id}
//! PATCH  /api/scenarios/{id}
//! GET    /api/scenarios/{id}/impacts
//! GET    /api/scenarios/{id}/price-forecasts

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::entities::{price_forecasts, scenario_impacts, scenarios};
use crate::error::{reject, ApiError};
use crate::models::scenario::{ScenarioCreate, ScenarioUpdate};
use crate::services::scenarios as scenario_service;
use crate::AppState;

pub async fn create_scenario(
    State(state): State<AppState>,
    Json(payload): Json<ScenarioCreate>,
) -> Result<(StatusCode, Json<scenarios::Model>), ApiError> {
    let correlation_id = uuid::Uuid::new_v4().to_string();
    info!(
        correlation_id = %correlation_id,
        scenario_type = %payload.scenario_type,
        "Create scenario request: {}",
        payload.name
    );

    let saved = scenario_service::create_scenario(&state.db, payload)
        .await
        .map_err(|e| reject(&correlation_id, e))?;

    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn get_scenario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<scenarios::Model>, ApiError> {
    let scenario = scenario_service::get_scenario(&state.db, id).await?;
    Ok(Json(scenario))
}

pub async fn update_scenario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<ScenarioUpdate>,
) -> Result<Json<scenarios::Model>, ApiError> {
    let correlation_id = uuid::Uuid::new_v4().to_string();
    info!(correlation_id = %correlation_id, scenario_id = id, "Update scenario request");

    let updated = scenario_service::update_scenario(&state.db, id, patch)
        .await
        .map_err(|e| reject(&correlation_id, e))?;

    Ok(Json(updated))
}

pub async fn get_scenario_impacts(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<scenario_impacts::Model>>, ApiError> {
    let impacts = scenario_service::list_impacts(&state.db, id).await?;
    Ok(Json(impacts))
}

pub async fn get_scenario_price_forecasts(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<price_forecasts::Model>>, ApiError> {
    let forecasts = scenario_service::list_price_forecasts(&state.db, id).await?;
    Ok(Json(forecasts))
}
