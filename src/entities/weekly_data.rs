//! SeaORM Entity for Weekly Petroleum Status Report observations

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{DispositionType, ProductType};
use crate::validation::{lengths, Constraints, Validate, ValidationError, QUANTITY};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weekly_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub series_id: String,
    pub product_type: ProductType,
    pub disposition_type: DispositionType,
    #[sea_orm(indexed)]
    pub week_ending: Date,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub value: Decimal,
    pub unit: String,
    /// Adjustment method label, e.g. "4-week average"
    pub seasonal_adjustment: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Validate for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .max_len("series_id", &self.series_id, lengths::SERIES_ID)
            .numeric("value", self.value, QUANTITY)
            .max_len("unit", &self.unit, lengths::UNIT)
            .max_len_opt(
                "seasonal_adjustment",
                self.seasonal_adjustment.as_deref(),
                lengths::SEASONAL_ADJUSTMENT,
            )
            .finish()
    }
}
