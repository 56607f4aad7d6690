use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::dashboard_config;
use crate::validation::{lengths, Constraints, Validate, ValidationError};

fn default_refresh_interval() -> i32 {
    60
}

fn default_date_range_days() -> i32 {
    365
}

fn default_true() -> bool {
    true
}

/// Request body for saving a dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfigCreate {
    pub config_name: String,
    pub dashboard_type: String,
    #[serde(default)]
    pub chart_configs: Map<String, Value>,
    #[serde(default)]
    pub data_filters: Map<String, Value>,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_minutes: i32,
    #[serde(default = "default_date_range_days")]
    pub default_date_range_days: i32,
    #[serde(default = "default_true")]
    pub include_forecasts: bool,
    #[serde(default)]
    pub include_scenarios: bool,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl Validate for DashboardConfigCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .max_len("config_name", &self.config_name, lengths::CONFIG_NAME)
            .max_len("dashboard_type", &self.dashboard_type, lengths::DASHBOARD_TYPE)
            .at_least("refresh_interval_minutes", self.refresh_interval_minutes, 1)
            .at_least("default_date_range_days", self.default_date_range_days, 1)
            .max_len_opt("created_by", self.created_by.as_deref(), lengths::CREATED_BY)
            .finish()
    }
}

impl From<DashboardConfigCreate> for dashboard_config::ActiveModel {
    fn from(req: DashboardConfigCreate) -> Self {
        dashboard_config::ActiveModel {
            id: NotSet,
            config_name: Set(req.config_name),
            dashboard_type: Set(req.dashboard_type),
            chart_configs: Set(Value::Object(req.chart_configs)),
            data_filters: Set(Value::Object(req.data_filters)),
            refresh_interval_minutes: Set(req.refresh_interval_minutes),
            default_date_range_days: Set(req.default_date_range_days),
            include_forecasts: Set(req.include_forecasts),
            include_scenarios: Set(req.include_scenarios),
            is_active: Set(true),
            created_by: Set(req.created_by),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}
