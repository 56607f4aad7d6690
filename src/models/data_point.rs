use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::entities::eia_data_points;
use crate::entities::sea_orm_active_enums::{DataSourceType, DispositionType, ProductType};
use crate::validation::{lengths, Constraints, Validate, ValidationError, QUANTITY};

/// Request body for recording one EIA observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EiaDataPointCreate {
    pub series_id: String,
    pub data_source: DataSourceType,
    pub product_type: ProductType,
    pub disposition_type: DispositionType,
    pub period_date: NaiveDate,
    pub value: Decimal,
    pub unit: String,
    #[serde(default)]
    pub region: Option<String>,
}

impl Validate for EiaDataPointCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .max_len("series_id", &self.series_id, lengths::SERIES_ID)
            .numeric("value", self.value, QUANTITY)
            .max_len("unit", &self.unit, lengths::UNIT)
            .max_len_opt("region", self.region.as_deref(), lengths::REGION)
            .finish()
    }
}

impl From<EiaDataPointCreate> for eia_data_points::ActiveModel {
    fn from(req: EiaDataPointCreate) -> Self {
        eia_data_points::ActiveModel {
            id: NotSet,
            series_id: Set(req.series_id),
            data_source: Set(req.data_source),
            product_type: Set(req.product_type),
            disposition_type: Set(req.disposition_type),
            period_date: Set(req.period_date),
            value: Set(req.value),
            unit: Set(req.unit),
            region: Set(req.region),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_deserialize_without_region() {
        let req: EiaDataPointCreate = serde_json::from_value(json!({
            "series_id": "PET.WGFUPUS2.W",
            "data_source": "WEEKLY",
            "product_type": "GASOLINE",
            "disposition_type": "DEMAND",
            "period_date": "2024-06-07",
            "value": "9045.00",
            "unit": "MBBL/D"
        }))
        .unwrap();

        assert_eq!(req.product_type, ProductType::Gasoline);
        assert_eq!(req.value, dec!(9045));
        assert!(req.region.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_unknown_product_rejected() {
        let result = serde_json::from_value::<EiaDataPointCreate>(json!({
            "series_id": "PET.X.W",
            "data_source": "WEEKLY",
            "product_type": "KEROSENE",
            "disposition_type": "DEMAND",
            "period_date": "2024-06-07",
            "value": "1.00",
            "unit": "MBBL/D"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_into_active_model_leaves_generated_columns_unset() {
        let req = EiaDataPointCreate {
            series_id: "PET.MCRFPUS2.M".to_string(),
            data_source: DataSourceType::Psm,
            product_type: ProductType::CrudeOil,
            disposition_type: DispositionType::Production,
            period_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            value: dec!(13150.00),
            unit: "MBBL/D".to_string(),
            region: None,
        };

        let active: eia_data_points::ActiveModel = req.into();
        assert!(active.id.is_not_set());
        assert!(active.created_at.is_not_set());
        assert_eq!(active.value.unwrap(), dec!(13150.00));
    }
}
