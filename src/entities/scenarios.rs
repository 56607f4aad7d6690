//! SeaORM Entity for supply shock scenarios
//!
//! A scenario is a hypothetical perturbation (hurricane, refinery outage,
//! demand surge...) whose computed effects live in `scenario_impacts`
//! and `price_forecasts`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{ScenarioType, SeverityLevel};
use crate::validation::{lengths, Constraints, Validate, ValidationError, PERCENT};

/// Saffir-Simpson bounds for `hurricane_category`
pub const MIN_HURRICANE_CATEGORY: i32 = 1;
pub const MAX_HURRICANE_CATEGORY: i32 = 5;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scenarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub scenario_type: ScenarioType,
    pub severity_level: SeverityLevel,
    pub start_date: Date,
    /// Expected on or after `start_date`; not enforced
    pub end_date: Date,
    pub hurricane_category: Option<i32>,
    /// Region names as a JSON array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub affected_regions: Json,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub production_impact_pct: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub refining_capacity_impact_pct: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub import_disruption_pct: Decimal,
    /// Free-form parameters for the impact simulator
    #[sea_orm(column_type = "JsonBinary")]
    pub parameters: Json,
    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scenario_impacts::Entity")]
    ScenarioImpacts,
    #[sea_orm(has_many = "super::price_forecasts::Entity")]
    PriceForecasts,
}

impl Related<super::scenario_impacts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScenarioImpacts.def()
    }
}

impl Related<super::price_forecasts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PriceForecasts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Validate for Model {
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
            .numeric("production_impact_pct", self.production_impact_pct, PERCENT)
            .numeric("refining_capacity_impact_pct", self.refining_capacity_impact_pct, PERCENT)
            .numeric("import_disruption_pct", self.import_disruption_pct, PERCENT)
            .string_list("affected_regions", &self.affected_regions)
            .object("parameters", &self.parameters)
            .max_len_opt("created_by", self.created_by.as_deref(), lengths::CREATED_BY)
            .finish()
    }
}
