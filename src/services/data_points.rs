//! Ingestion of raw EIA observations

use sea_orm::{ActiveModelTrait, DatabaseConnection};

use crate::entities::eia_data_points;
use crate::error::CatalogError;
use crate::models::data_point::EiaDataPointCreate;
use crate::validation::Validate;

/// Validate and store one observation
pub async fn record_data_point(
    db: &DatabaseConnection,
    req: EiaDataPointCreate,
) -> Result<eia_data_points::Model, CatalogError> {
    req.validate()?;

    let active: eia_data_points::ActiveModel = req.into();
    let saved = active.insert(db).await?;

    tracing::info!(
        id = saved.id,
        series_id = %saved.series_id,
        period_date = %saved.period_date,
        "Recorded EIA data point"
    );

    Ok(saved)
}
