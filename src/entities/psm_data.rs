//! SeaORM Entity for Petroleum Supply Monthly observations

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{DispositionType, ProductType};
use crate::validation::{lengths, Constraints, Validate, ValidationError, QUANTITY};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "psm_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub series_id: String,
    pub product_type: ProductType,
    pub disposition_type: DispositionType,
    /// First day of the reported month
    pub report_month: Date,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub value: Decimal,
    pub unit: String,
    /// Set when the figure revises a previously published value
    pub revision_flag: bool,
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
            .finish()
    }
}
