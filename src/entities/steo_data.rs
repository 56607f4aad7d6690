//! SeaORM Entity for Short-Term Energy Outlook forecasts

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ProductType;
use crate::validation::{lengths, Constraints, Validate, ValidationError, QUANTITY};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "steo_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub series_id: String,
    pub product_type: ProductType,
    pub forecast_period: Date,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub forecast_value: Decimal,
    pub unit: String,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))", nullable)]
    pub confidence_interval_low: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))", nullable)]
    pub confidence_interval_high: Option<Decimal>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Validate for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .max_len("series_id", &self.series_id, lengths::SERIES_ID)
            .numeric("forecast_value", self.forecast_value, QUANTITY)
            .max_len("unit", &self.unit, lengths::UNIT)
            .numeric_opt("confidence_interval_low", self.confidence_interval_low, QUANTITY)
            .numeric_opt("confidence_interval_high", self.confidence_interval_high, QUANTITY)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_confidence_interval_precision() {
        let mut forecast = Model {
            id: 1,
            series_id: "STEO.PAPR_WORLD.M".to_string(),
            product_type: ProductType::CrudeOil,
            forecast_period: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            forecast_value: dec!(103.45),
            unit: "MMBBL/D".to_string(),
            confidence_interval_low: Some(dec!(101.2)),
            confidence_interval_high: None,
            created_at: Utc::now().fixed_offset(),
        };
        assert!(forecast.validate().is_ok());

        forecast.confidence_interval_high = Some(dec!(105.005));
        let err = forecast.validate().unwrap_err();
        assert_eq!(err.fields(), vec!["confidence_interval_high"]);
    }
}
