use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::sea_orm_active_enums::ProductType;
use crate::entities::supply_disposition;
use crate::validation::{lengths, Constraints, Validate, ValidationError, QUANTITY};

/// Query parameters for GET /api/supply-disposition/summary
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryQuery {
    pub product_type: ProductType,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub region: Option<String>,
}

/// Aggregated balance for one product and period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyDispositionSummary {
    pub product_type: ProductType,
    pub period_date: NaiveDate,
    pub total_supply: Decimal,
    pub total_disposition: Decimal,
    /// Supply minus disposition; zero when the period balances
    pub balance: Decimal,
    pub unit: String,
    pub region: Option<String>,
}

impl From<&supply_disposition::Model> for SupplyDispositionSummary {
    fn from(row: &supply_disposition::Model) -> Self {
        let total_supply = row.total_supply();
        let total_disposition = row.total_disposition();
        Self {
            product_type: row.product_type,
            period_date: row.period_date,
            total_supply,
            total_disposition,
            balance: total_supply - total_disposition,
            unit: row.unit.clone(),
            region: row.region.clone(),
        }
    }
}

impl Validate for SupplyDispositionSummary {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .numeric("total_supply", self.total_supply, QUANTITY)
            .numeric("total_disposition", self.total_disposition, QUANTITY)
            .numeric("balance", self.balance, QUANTITY)
            .max_len("unit", &self.unit, lengths::UNIT)
            .max_len_opt("region", self.region.as_deref(), lengths::REGION)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::supply_disposition::fixtures::gasoline_balance;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_from_balance_row() {
        let row = gasoline_balance();
        let summary = SupplyDispositionSummary::from(&row);

        assert_eq!(summary.product_type, ProductType::Gasoline);
        assert_eq!(summary.total_supply, dec!(10625.35));
        assert_eq!(summary.total_disposition, dec!(10001.15));
        assert_eq!(summary.balance, dec!(624.20));
        assert!(summary.validate().is_ok());
    }

    #[test]
    fn test_summary_totals_can_overflow_column() {
        let mut row = gasoline_balance();
        row.production = dec!(9999999999999.99);
        row.imports = dec!(9999999999999.99);
        let summary = SupplyDispositionSummary::from(&row);

        let err = summary.validate().unwrap_err();
        assert_eq!(err.fields(), vec!["total_supply", "balance"]);
    }
}
