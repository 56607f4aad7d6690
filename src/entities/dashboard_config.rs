//! SeaORM Entity for dashboard display configuration
//!
//! `config_name` is unique; the database index enforces it. Rows are mutable
//! and `updated_at` is refreshed on every save.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::validation::{lengths, Constraints, Validate, ValidationError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dashboard_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub config_name: String,
    /// supply_disposition, scenario_analysis, price_forecast
    pub dashboard_type: String,

    // Display configuration
    #[sea_orm(column_type = "JsonBinary")]
    pub chart_configs: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub data_filters: Json,
    pub refresh_interval_minutes: i32,

    // Report settings
    pub default_date_range_days: i32,
    pub include_forecasts: bool,
    pub include_scenarios: bool,

    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now().fixed_offset();
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

impl Validate for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .max_len("config_name", &self.config_name, lengths::CONFIG_NAME)
            .max_len("dashboard_type", &self.dashboard_type, lengths::DASHBOARD_TYPE)
            .object("chart_configs", &self.chart_configs)
            .object("data_filters", &self.data_filters)
            .at_least("refresh_interval_minutes", self.refresh_interval_minutes, 1)
            .at_least("default_date_range_days", self.default_date_range_days, 1)
            .max_len_opt("created_by", self.created_by.as_deref(), lengths::CREATED_BY)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    #[test]
    fn test_interval_and_range_minimums() {
        let stamp = Utc::now().fixed_offset();
        let mut config = Model {
            id: 1,
            config_name: "gulf-coast-ops".to_string(),
            dashboard_type: "supply_disposition".to_string(),
            chart_configs: json!({ "layout": "grid" }),
            data_filters: json!({}),
            refresh_interval_minutes: 60,
            default_date_range_days: 365,
            include_forecasts: true,
            include_scenarios: false,
            is_active: true,
            created_by: None,
            created_at: stamp,
            updated_at: stamp,
        };
        assert!(config.validate().is_ok());

        config.refresh_interval_minutes = 0;
        config.default_date_range_days = -7;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.fields(),
            vec!["refresh_interval_minutes", "default_date_range_days"]
        );
    }

    #[tokio::test]
    async fn test_insert_stamps_timestamps() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let active = ActiveModel {
            config_name: Set("weekly-stocks".to_string()),
            ..Default::default()
        };

        let hooked = active.before_save(&db, true).await.unwrap();
        assert_eq!(hooked.created_at.unwrap(), hooked.updated_at.unwrap());
    }
}
