//! SeaORM Entity for scenario-conditioned price forecasts
//!
//! A forecast carries both the baseline and the scenario price together with
//! the derived absolute and percentage impact. `scenario_id` is nullable so a
//! forecast can outlive or predate its scenario.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ProductType;
use crate::validation::{lengths, Constraints, Validate, ValidationError, PERCENT, PRICE};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "price_forecasts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub scenario_id: Option<i32>,
    pub product_type: ProductType,
    pub forecast_date: Date,
    #[sea_orm(column_type = "Decimal(Some((10, 4)))")]
    pub forecast_price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 4)))")]
    pub baseline_price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 4)))")]
    pub price_impact: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub price_impact_pct: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub confidence_level: Option<Decimal>,
    pub price_type: String,
    pub location: String,
    pub unit: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scenarios::Entity",
        from = "Column::ScenarioId",
        to = "super::scenarios::Column::Id",
        on_delete = "SetNull"
    )]
    Scenario,
}

impl Related<super::scenarios::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scenario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Validate for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .numeric("forecast_price", self.forecast_price, PRICE)
            .numeric("baseline_price", self.baseline_price, PRICE)
            .numeric("price_impact", self.price_impact, PRICE)
            .numeric("price_impact_pct", self.price_impact_pct, PERCENT)
            .numeric_opt("confidence_level", self.confidence_level, PERCENT)
            .max_len("price_type", &self.price_type, lengths::PRICE_TYPE)
            .max_len("location", &self.location, lengths::LOCATION)
            .max_len("unit", &self.unit, lengths::UNIT)
            .finish()
    }
}
