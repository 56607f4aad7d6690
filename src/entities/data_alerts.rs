//! SeaORM Entity for data anomaly and threshold alerts
//!
//! The alert-evaluation engine reads these rows and writes `last_triggered`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{ProductType, SeverityLevel};
use crate::validation::{lengths, Constraints, Validate, ValidationError, THRESHOLD};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "data_alerts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub alert_name: String,
    /// threshold, anomaly, missing_data, price_spike
    pub alert_type: String,

    // Alert criteria
    pub product_type: Option<ProductType>,
    #[sea_orm(column_type = "Decimal(Some((15, 4)))", nullable)]
    pub threshold_value: Option<Decimal>,
    /// One of >, <, >=, <=, =
    pub threshold_operator: Option<String>,

    pub check_frequency_minutes: i32,
    pub cooldown_hours: i32,
    pub severity_level: SeverityLevel,

    pub is_active: bool,
    pub last_triggered: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Validate for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .max_len("alert_name", &self.alert_name, lengths::ALERT_NAME)
            .max_len("alert_type", &self.alert_type, lengths::ALERT_TYPE)
            .numeric_opt("threshold_value", self.threshold_value, THRESHOLD)
            .max_len_opt(
                "threshold_operator",
                self.threshold_operator.as_deref(),
                lengths::THRESHOLD_OPERATOR,
            )
            .at_least("check_frequency_minutes", self.check_frequency_minutes, 1)
            .at_least("cooldown_hours", self.cooldown_hours, 1)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    pub fn gasoline_price_spike() -> Model {
        Model {
            id: 9,
            alert_name: "Retail gasoline above $4".to_string(),
            alert_type: "threshold".to_string(),
            product_type: Some(ProductType::Gasoline),
            threshold_value: Some(dec!(4.0000)),
            threshold_operator: Some(">".to_string()),
            check_frequency_minutes: 60,
            cooldown_hours: 24,
            severity_level: SeverityLevel::Moderate,
            is_active: true,
            last_triggered: None,
            created_at: Utc::now().fixed_offset(),
        }
    }
}
