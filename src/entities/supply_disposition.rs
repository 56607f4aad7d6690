//! SeaORM Entity for per-product supply/disposition balances
//!
//! Supply and disposition components are stored separately. Nothing here
//! forces the two sides to balance; consumers compare the totals.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ProductType;
use crate::validation::{lengths, Constraints, Validate, ValidationError, QUANTITY};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supply_disposition")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_type: ProductType,
    #[sea_orm(indexed)]
    pub period_date: Date,
    /// Observation this balance was derived from, if traced
    pub data_point_id: Option<i32>,

    // Supply components
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub production: Decimal,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub imports: Decimal,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub stock_withdrawal: Decimal,

    // Disposition components
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub exports: Decimal,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub refinery_input: Decimal,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub product_supplied: Decimal,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub stock_build: Decimal,

    pub unit: String,
    pub region: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::eia_data_points::Entity",
        from = "Column::DataPointId",
        to = "super::eia_data_points::Column::Id",
        on_delete = "SetNull"
    )]
    DataPoint,
}

impl Related<super::eia_data_points::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DataPoint.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn total_supply(&self) -> Decimal {
        self.production + self.imports + self.stock_withdrawal
    }

    pub fn total_disposition(&self) -> Decimal {
        self.exports + self.refinery_input + self.product_supplied + self.stock_build
    }
}

impl Validate for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .numeric("production", self.production, QUANTITY)
            .numeric("imports", self.imports, QUANTITY)
            .numeric("stock_withdrawal", self.stock_withdrawal, QUANTITY)
            .numeric("exports", self.exports, QUANTITY)
            .numeric("refinery_input", self.refinery_input, QUANTITY)
            .numeric("product_supplied", self.product_supplied, QUANTITY)
            .numeric("stock_build", self.stock_build, QUANTITY)
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

    /// Gasoline balance for one month, in thousand barrels per day
    pub fn gasoline_balance() -> Model {
        Model {
            id: 11,
            product_type: ProductType::Gasoline,
            period_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            data_point_id: Some(4),
            production: dec!(9850.25),
            imports: dec!(720.10),
            stock_withdrawal: dec!(55.00),
            exports: dec!(880.40),
            refinery_input: dec!(0),
            product_supplied: dec!(9120.75),
            stock_build: dec!(0),
            unit: "MBBL/D".to_string(),
            region: None,
            created_at: Utc::now().fixed_offset(),
        }
    }
}
