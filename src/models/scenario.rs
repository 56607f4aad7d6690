use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::scenarios::{self, MAX_HURRICANE_CATEGORY, MIN_HURRICANE_CATEGORY};
use crate::entities::sea_orm_active_enums::{ScenarioType, SeverityLevel};
use crate::validation::{lengths, Constraints, Validate, ValidationError, PERCENT};

/// Request body for defining a new scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioCreate {
    pub name: String,
    pub description: String,
    pub scenario_type: ScenarioType,
    pub severity_level: SeverityLevel,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub hurricane_category: Option<i32>,
    #[serde(default)]
    pub affected_regions: Vec<String>,
    #[serde(default)]
    pub production_impact_pct: Decimal,
    #[serde(default)]
    pub refining_capacity_impact_pct: Decimal,
    #[serde(default)]
    pub import_disruption_pct: Decimal,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl Validate for ScenarioCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .max_len("name", &self.name, lengths::SCENARIO_NAME)
            .max_len("description", &self.description, lengths::DESCRIPTION)
            .between_opt(
                "hurricane_category",
                self.hurricane_category,
                MIN_HURRICANE_CATEGORY,
                MAX_HURRICANE_CATEGORY,
            )
            .max_len_each("affected_regions", &self.affected_regions, lengths::REGION)
            .numeric("production_impact_pct", self.production_impact_pct, PERCENT)
            .numeric("refining_capacity_impact_pct", self.refining_capacity_impact_pct, PERCENT)
            .numeric("import_disruption_pct", self.import_disruption_pct, PERCENT)
            .max_len_opt("created_by", self.created_by.as_deref(), lengths::CREATED_BY)
            .finish()
    }
}

impl From<ScenarioCreate> for scenarios::ActiveModel {
    fn from(req: ScenarioCreate) -> Self {
        scenarios::ActiveModel {
            id: NotSet,
            name: Set(req.name),
            description: Set(req.description),
            scenario_type: Set(req.scenario_type),
            severity_level: Set(req.severity_level),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            hurricane_category: Set(req.hurricane_category),
            affected_regions: Set(Value::from(req.affected_regions)),
            production_impact_pct: Set(req.production_impact_pct),
            refining_capacity_impact_pct: Set(req.refining_capacity_impact_pct),
            import_disruption_pct: Set(req.import_disruption_pct),
            parameters: Set(Value::Object(req.parameters)),
            is_active: Set(true),
            created_by: Set(req.created_by),
            created_at: NotSet,
        }
    }
}

/// Partial update of a scenario; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub severity_level: Option<SeverityLevel>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub production_impact_pct: Option<Decimal>,
    pub refining_capacity_impact_pct: Option<Decimal>,
    pub import_disruption_pct: Option<Decimal>,
    pub parameters: Option<Map<String, Value>>,
    pub is_active: Option<bool>,
}

impl ScenarioUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.severity_level.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.production_impact_pct.is_none()
            && self.refining_capacity_impact_pct.is_none()
            && self.import_disruption_pct.is_none()
            && self.parameters.is_none()
            && self.is_active.is_none()
    }

    /// Copies the present fields onto `active`
    pub fn apply(self, active: &mut scenarios::ActiveModel) {
        if let Some(name) = self.name {
            active.name = Set(name);
        }
        if let Some(description) = self.description {
            active.description = Set(description);
        }
        if let Some(severity_level) = self.severity_level {
            active.severity_level = Set(severity_level);
        }
        if let Some(start_date) = self.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = self.end_date {
            active.end_date = Set(end_date);
        }
        if let Some(pct) = self.production_impact_pct {
            active.production_impact_pct = Set(pct);
        }
        if let Some(pct) = self.refining_capacity_impact_pct {
            active.refining_capacity_impact_pct = Set(pct);
        }
        if let Some(pct) = self.import_disruption_pct {
            active.import_disruption_pct = Set(pct);
        }
        if let Some(parameters) = self.parameters {
            active.parameters = Set(Value::Object(parameters));
        }
        if let Some(is_active) = self.is_active {
            active.is_active = Set(is_active);
        }
    }
}

impl Validate for ScenarioUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .max_len_opt("name", self.name.as_deref(), lengths::SCENARIO_NAME)
            .max_len_opt("description", self.description.as_deref(), lengths::DESCRIPTION)
            .numeric_opt("production_impact_pct", self.production_impact_pct, PERCENT)
            .numeric_opt(
                "refining_capacity_impact_pct",
                self.refining_capacity_impact_pct,
                PERCENT,
            )
            .numeric_opt("import_disruption_pct", self.import_disruption_pct, PERCENT)
            .finish()
    }
}
