//! SeaORM Entity for per-scenario impact results
//!
//! Rows are written by the scenario simulator. `impact_absolute` is expected
//! to equal `scenario_value - baseline_value`, but that is the writer's
//! responsibility; see [`Model::impact_drift`] for consumers that want to check.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{DispositionType, ProductType};
use crate::validation::{lengths, Constraints, Validate, ValidationError, PERCENT, QUANTITY};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scenario_impacts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub scenario_id: i32,
    pub product_type: ProductType,
    pub disposition_type: DispositionType,
    pub impact_date: Date,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub baseline_value: Decimal,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub scenario_value: Decimal,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub impact_absolute: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub impact_percentage: Decimal,
    pub unit: String,
    pub region: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scenarios::Entity",
        from = "Column::ScenarioId",
        to = "super::scenarios::Column::Id",
        on_delete = "Cascade"
    )]
    Scenario,
}

impl Related<super::scenarios::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scenario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Difference between the stored absolute impact and the one implied by
    /// the baseline and scenario values. Zero for consistent rows.
    pub fn impact_drift(&self) -> Decimal {
        self.impact_absolute - (self.scenario_value - self.baseline_value)
    }
}

impl Validate for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .numeric("baseline_value", self.baseline_value, QUANTITY)
            .numeric("scenario_value", self.scenario_value, QUANTITY)
            .numeric("impact_absolute", self.impact_absolute, QUANTITY)
            .numeric("impact_percentage", self.impact_percentage, PERCENT)
            .max_len("unit", &self.unit, lengths::UNIT)
            .max_len_opt("region", self.region.as_deref(), lengths::REGION)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    pub fn refinery_input_drop(scenario_id: i32) -> Model {
        Model {
            id: 21,
            scenario_id,
            product_type: ProductType::CrudeOil,
            disposition_type: DispositionType::RefineryInput,
            impact_date: NaiveDate::from_ymd_opt(2025, 8, 28).unwrap(),
            baseline_value: dec!(16200.00),
            scenario_value: dec!(12312.00),
            impact_absolute: dec!(-3888.00),
            impact_percentage: dec!(-24.00),
            unit: "MBBL/D".to_string(),
            region: Some("PADD 3".to_string()),
            created_at: Utc::now().fixed_offset(),
        }
    }
}
