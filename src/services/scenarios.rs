//! Scenario definitions and their computed impacts and price forecasts

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder};

use crate::entities::{price_forecasts, scenario_impacts, scenarios, prelude::*};
use crate::error::CatalogError;
use crate::models::scenario::{ScenarioCreate, ScenarioUpdate};
use crate::validation::Validate;

fn warn_if_inverted(scenario: &scenarios::Model) {
    if scenario.end_date < scenario.start_date {
        tracing::warn!(
            scenario_id = scenario.id,
            start_date = %scenario.start_date,
            end_date = %scenario.end_date,
            "Scenario ends before it starts"
        );
    }
}

pub async fn create_scenario(
    db: &DatabaseConnection,
    req: ScenarioCreate,
) -> Result<scenarios::Model, CatalogError> {
    req.validate()?;

    let active: scenarios::ActiveModel = req.into();
    let saved = active.insert(db).await?;
    warn_if_inverted(&saved);

    tracing::info!(
        scenario_id = saved.id,
        scenario_type = %saved.scenario_type,
        "Created scenario '{}'",
        saved.name
    );

    Ok(saved)
}

pub async fn get_scenario(db: &DatabaseConnection, id: i32) -> Result<scenarios::Model, CatalogError> {
    Scenarios::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("scenario {}", id)))
}

/// Apply a partial update; an empty patch returns the stored row unchanged
pub async fn update_scenario(
    db: &DatabaseConnection,
    id: i32,
    patch: ScenarioUpdate,
) -> Result<scenarios::Model, CatalogError> {
    patch.validate()?;

    let existing = get_scenario(db, id).await?;
    if patch.is_empty() {
        tracing::debug!(scenario_id = id, "Empty scenario patch, nothing to update");
        return Ok(existing);
    }

    let mut active: scenarios::ActiveModel = existing.into();
    patch.apply(&mut active);
    let updated = active.update(db).await?;
    warn_if_inverted(&updated);

    tracing::info!(scenario_id = id, "Updated scenario");
    Ok(updated)
}

pub async fn list_impacts(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Vec<scenario_impacts::Model>, CatalogError> {
    let scenario = get_scenario(db, id).await?;
    let impacts = scenario
        .find_related(ScenarioImpacts)
        .order_by_asc(scenario_impacts::Column::ImpactDate)
        .order_by_asc(scenario_impacts::Column::Id)
        .all(db)
        .await?;

    tracing::debug!(scenario_id = id, count = impacts.len(), "Loaded scenario impacts");
    Ok(impacts)
}

pub async fn list_price_forecasts(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Vec<price_forecasts::Model>, CatalogError> {
    let scenario = get_scenario(db, id).await?;
    let forecasts = scenario
        .find_related(PriceForecasts)
        .order_by_asc(price_forecasts::Column::ForecastDate)
        .order_by_asc(price_forecasts::Column::Id)
        .all(db)
        .await?;

    tracing::debug!(scenario_id = id, count = forecasts.len(), "Loaded price forecasts");
    Ok(forecasts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::price_forecasts::fixtures::gulf_coast_gasoline;
    use crate::entities::scenario_impacts::fixtures::refinery_input_drop;
    use crate::entities::scenarios::fixtures::gulf_hurricane;
    use crate::entities::sea_orm_active_enums::SeverityLevel;
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    #[tokio::test]
    async fn test_get_missing_scenario() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<scenarios::Model>::new()])
            .into_connection();

        let err = get_scenario(&db, 404).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(ref msg) if msg == "scenario 404"));
    }

    #[tokio::test]
    async fn test_create_scenario_with_bad_category_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let req: ScenarioCreate = serde_json::from_value(json!({
            "name": "Cat 6",
            "description": "Beyond the scale",
            "scenario_type": "HURRICANE",
            "severity_level": "EXTREME",
            "start_date": "2025-09-01",
            "end_date": "2025-09-10",
            "hurricane_category": 6
        }))
        .unwrap();

        let err = create_scenario(&db, req).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn test_create_scenario_returns_stored_row() {
        let stored = gulf_hurricane();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();
        let req: ScenarioCreate = serde_json::from_value(json!({
            "name": stored.name,
            "description": stored.description,
            "scenario_type": "HURRICANE",
            "severity_level": "HIGH",
            "start_date": "2025-08-25",
            "end_date": "2025-09-20",
            "hurricane_category": 4,
            "affected_regions": ["PADD 3", "Gulf of Mexico"]
        }))
        .unwrap();

        let saved = create_scenario(&db, req).await.unwrap();
        assert_eq!(saved.id, 3);
    }

    #[tokio::test]
    async fn test_empty_patch_skips_update() {
        let stored = gulf_hurricane();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();

        let result = update_scenario(&db, 3, ScenarioUpdate::default()).await.unwrap();
        assert_eq!(result, stored);

        // Only the lookup ran
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn test_patch_updates_row() {
        let stored = gulf_hurricane();
        let updated = scenarios::Model {
            severity_level: SeverityLevel::Extreme,
            refining_capacity_impact_pct: dec!(-40.00),
            ..stored.clone()
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored]])
            .append_query_results([vec![updated.clone()]])
            .into_connection();

        let patch = ScenarioUpdate {
            severity_level: Some(SeverityLevel::Extreme),
            refining_capacity_impact_pct: Some(dec!(-40.00)),
            ..Default::default()
        };
        let result = update_scenario(&db, 3, patch).await.unwrap();
        assert_eq!(result, updated);

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        let sql = format!("{:?}", log[1]);
        assert!(sql.contains("UPDATE") && sql.contains("scenarios"));
    }

    #[tokio::test]
    async fn test_patch_missing_scenario() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<scenarios::Model>::new()])
            .into_connection();
        let patch = ScenarioUpdate {
            is_active: Some(false),
            ..Default::default()
        };

        let err = update_scenario(&db, 8, patch).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_related_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![gulf_hurricane()]])
            .append_query_results([vec![refinery_input_drop(3), refinery_input_drop(3)]])
            .append_query_results([vec![gulf_hurricane()]])
            .append_query_results([vec![gulf_coast_gasoline(Some(3))]])
            .into_connection();

        let impacts = list_impacts(&db, 3).await.unwrap();
        assert_eq!(impacts.len(), 2);
        assert!(impacts.iter().all(|impact| impact.scenario_id == 3));

        let forecasts = list_price_forecasts(&db, 3).await.unwrap();
        assert_eq!(forecasts.len(), 1);
        assert_eq!(forecasts[0].scenario_id, Some(3));
    }
}
