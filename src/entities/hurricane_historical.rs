//! SeaORM Entity for historical hurricane impacts used to calibrate scenarios

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::scenarios::{MAX_HURRICANE_CATEGORY, MIN_HURRICANE_CATEGORY};
use crate::validation::{lengths, Constraints, Validate, ValidationError, PERCENT, SPIKE_PERCENT};

/// Earliest season with reliable impact records
pub const FIRST_RECORDED_YEAR: i32 = 1950;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hurricane_historical")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hurricane_name: String,
    pub year: i32,
    /// Saffir-Simpson category at landfall
    pub category: i32,
    pub landfall_date: Date,
    #[sea_orm(column_type = "JsonBinary")]
    pub affected_regions: Json,

    // Impact metrics
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub refinery_capacity_lost_pct: Decimal,
    pub production_disruption_days: i32,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))")]
    pub price_spike_gasoline_pct: Decimal,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))")]
    pub price_spike_crude_pct: Decimal,

    // Recovery metrics
    pub recovery_days_production: i32,
    pub recovery_days_refining: i32,

    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Validate for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .max_len("hurricane_name", &self.hurricane_name, lengths::HURRICANE_NAME)
            .at_least("year", self.year, FIRST_RECORDED_YEAR)
            .between("category", self.category, MIN_HURRICANE_CATEGORY, MAX_HURRICANE_CATEGORY)
            .string_list("affected_regions", &self.affected_regions)
            .numeric("refinery_capacity_lost_pct", self.refinery_capacity_lost_pct, PERCENT)
            .at_least("production_disruption_days", self.production_disruption_days, 0)
            .numeric("price_spike_gasoline_pct", self.price_spike_gasoline_pct, SPIKE_PERCENT)
            .numeric("price_spike_crude_pct", self.price_spike_crude_pct, SPIKE_PERCENT)
            .at_least("recovery_days_production", self.recovery_days_production, 0)
            .at_least("recovery_days_refining", self.recovery_days_refining, 0)
            .max_len_opt("notes", self.notes.as_deref(), lengths::NOTES)
            .finish()
    }
}
