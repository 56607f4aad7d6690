//! SeaORM Entity for raw EIA observations
//!
//! One row per (series, period) observation ingested from an EIA publication.
//! Rows are mutable: `updated_at` is refreshed on every save.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{DataSourceType, DispositionType, ProductType};
use crate::validation::{lengths, Constraints, Validate, ValidationError, QUANTITY};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "eia_data_points")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// EIA series identifier (e.g. "PET.WCRFPUS2.W")
    #[sea_orm(indexed)]
    pub series_id: String,
    pub data_source: DataSourceType,
    pub product_type: ProductType,
    pub disposition_type: DispositionType,
    #[sea_orm(indexed)]
    pub period_date: Date,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub value: Decimal,
    pub unit: String,
    pub region: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::supply_disposition::Entity")]
    SupplyDisposition,
}

impl Related<super::supply_disposition::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplyDisposition.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now().fixed_offset();
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

impl Validate for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .max_len("series_id", &self.series_id, lengths::SERIES_ID)
            .numeric("value", self.value, QUANTITY)
            .max_len("unit", &self.unit, lengths::UNIT)
            .max_len_opt("region", self.region.as_deref(), lengths::REGION)
            .finish()
    }
}
