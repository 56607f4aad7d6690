//! Alert bookkeeping

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::entities::{data_alerts, prelude::*};
use crate::error::CatalogError;

/// Stamp `last_triggered` with the current time
pub async fn record_trigger(
    db: &DatabaseConnection,
    id: i32,
) -> Result<data_alerts::Model, CatalogError> {
    let alert = DataAlerts::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("alert {}", id)))?;

    if !alert.is_active {
        tracing::warn!(alert_id = id, "Recording trigger for inactive alert");
    }

    let severity = alert.severity_level;
    let mut active: data_alerts::ActiveModel = alert.into();
    active.last_triggered = Set(Some(Utc::now().fixed_offset()));
    let updated = active.update(db).await?;

    tracing::info!(
        alert_id = id,
        severity = %severity,
        "Alert '{}' triggered",
        updated.alert_name
    );
    Ok(updated)
}
