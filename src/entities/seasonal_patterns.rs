//! SeaORM Entity for monthly seasonal adjustment factors

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{DispositionType, ProductType};
use crate::validation::{lengths, Constraints, Validate, ValidationError, FACTOR};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seasonal_patterns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_type: ProductType,
    pub disposition_type: DispositionType,
    /// Calendar month, 1 = January
    pub month: i32,
    pub region: Option<String>,

    // Seasonal adjustment factors
    #[sea_orm(column_type = "Decimal(Some((6, 4)))")]
    pub seasonal_index: Decimal,
    #[sea_orm(column_type = "Decimal(Some((6, 4)))")]
    pub trend_factor: Decimal,
    #[sea_orm(column_type = "Decimal(Some((6, 4)))")]
    pub volatility_multiplier: Decimal,

    /// Years of history the factors were fitted on
    pub years_of_data: i32,
    pub last_updated: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        // Refits rewrite the factors; keep last_updated in step
        if !insert || self.last_updated.is_not_set() {
            self.last_updated = Set(Utc::now().fixed_offset());
        }
        Ok(self)
    }
}

impl Validate for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .between("month", self.month, 1, 12)
            .max_len_opt("region", self.region.as_deref(), lengths::REGION)
            .numeric("seasonal_index", self.seasonal_index, FACTOR)
            .numeric("trend_factor", self.trend_factor, FACTOR)
            .numeric("volatility_multiplier", self.volatility_multiplier, FACTOR)
            .at_least("years_of_data", self.years_of_data, 1)
            .finish()
    }
}
