//! Saved dashboard configurations

use sea_orm::{ActiveModelTrait, DatabaseConnection};

use crate::entities::dashboard_config;
use crate::error::CatalogError;
use crate::models::dashboard::DashboardConfigCreate;
use crate::validation::Validate;

/// Store a new configuration. A duplicate `config_name` surfaces as
/// [`CatalogError::Conflict`] from the unique index.
pub async fn create_dashboard_config(
    db: &DatabaseConnection,
    req: DashboardConfigCreate,
) -> Result<dashboard_config::Model, CatalogError> {
    req.validate()?;

    let config_name = req.config_name.clone();
    let active: dashboard_config::ActiveModel = req.into();
    let saved = active.insert(db).await.map_err(|e| {
        let err = CatalogError::from(e);
        if matches!(err, CatalogError::Conflict(_)) {
            tracing::warn!(config_name = %config_name, "Dashboard config name already taken");
        }
        err
    })?;

    tracing::info!(id = saved.id, config_name = %saved.config_name, "Saved dashboard config");
    Ok(saved)
}
