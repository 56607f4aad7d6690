use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::ApiError;
use crate::models::supply_disposition::{SummaryQuery, SupplyDispositionSummary};
use crate::services::supply_disposition::summarize;
use crate::AppState;

/// GET /api/supply-disposition/summary?product_type=GASOLINE&start_date=2024-01-01
pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<Vec<SupplyDispositionSummary>>, ApiError> {
    let summaries = summarize(&state.db, &query).await?;
    Ok(Json(summaries))
}
