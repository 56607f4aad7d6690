//! SeaORM Entity for observed market prices

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ProductType;
use crate::validation::{lengths, Constraints, Validate, ValidationError, PRICE, QUANTITY, VOLATILITY};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "price_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_type: ProductType,
    #[sea_orm(indexed)]
    pub price_date: Date,
    #[sea_orm(column_type = "Decimal(Some((10, 4)))")]
    pub price: Decimal,
    /// spot, futures, retail, wholesale
    pub price_type: String,
    /// Trading hub or market, e.g. "Cushing, OK"
    pub location: String,
    pub unit: String,

    // Market indicators
    #[sea_orm(column_type = "Decimal(Some((15, 2)))", nullable)]
    pub volume: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))", nullable)]
    pub open_interest: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((8, 4)))", nullable)]
    pub volatility: Option<Decimal>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Validate for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .numeric("price", self.price, PRICE)
            .max_len("price_type", &self.price_type, lengths::PRICE_TYPE)
            .max_len("location", &self.location, lengths::LOCATION)
            .max_len("unit", &self.unit, lengths::UNIT)
            .numeric_opt("volume", self.volume, QUANTITY)
            .numeric_opt("open_interest", self.open_interest, QUANTITY)
            .numeric_opt("volatility", self.volatility, VOLATILITY)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    fn wti_spot() -> Model {
        Model {
            id: 1,
            product_type: ProductType::CrudeOil,
            price_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            price: dec!(68.1700),
            price_type: "spot".to_string(),
            location: "Cushing, OK".to_string(),
            unit: "USD/BBL".to_string(),
            volume: Some(dec!(312450.00)),
            open_interest: None,
            volatility: Some(dec!(0.3125)),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn test_price_scale_is_four() {
        let mut quote = wti_spot();
        assert!(quote.validate().is_ok());

        quote.price = dec!(68.17125);
        assert_eq!(quote.validate().unwrap_err().fields(), vec!["price"]);

        // 7 whole digits exceed NUMERIC(10, 4)
        quote.price = dec!(1000000);
        assert_eq!(quote.validate().unwrap_err().fields(), vec!["price"]);
    }

    #[test]
    fn test_market_indicator_precision() {
        let mut quote = wti_spot();
        quote.volatility = Some(dec!(10000.5));
        quote.open_interest = Some(dec!(1.111));
        let err = quote.validate().unwrap_err();
        assert_eq!(err.fields(), vec!["open_interest", "volatility"]);
    }
}
