//! Supply/disposition balance summaries

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{prelude::*, supply_disposition};
use crate::error::CatalogError;
use crate::models::supply_disposition::{SummaryQuery, SupplyDispositionSummary};
use crate::validation::Validate;

/// Balance summaries for one product, oldest period first.
///
/// Date bounds are inclusive. An inverted range matches nothing. Rows whose
/// totals or balance overflow the summary columns are logged and left out.
pub async fn summarize(
    db: &DatabaseConnection,
    query: &SummaryQuery,
) -> Result<Vec<SupplyDispositionSummary>, CatalogError> {
    let mut select = SupplyDisposition::find()
        .filter(supply_disposition::Column::ProductType.eq(query.product_type));

    if let Some(start) = query.start_date {
        select = select.filter(supply_disposition::Column::PeriodDate.gte(start));
    }
    if let Some(end) = query.end_date {
        select = select.filter(supply_disposition::Column::PeriodDate.lte(end));
    }
    if let Some(region) = &query.region {
        select = select.filter(supply_disposition::Column::Region.eq(region.as_str()));
    }

    let rows = select
        .order_by_asc(supply_disposition::Column::PeriodDate)
        .order_by_asc(supply_disposition::Column::Id)
        .all(db)
        .await?;

    let mut summaries = Vec::with_capacity(rows.len());
    for row in &rows {
        let summary = SupplyDispositionSummary::from(row);
        if let Err(err) = summary.validate() {
            tracing::warn!(
                row_id = row.id,
                period_date = %row.period_date,
                error = %err,
                "Skipping balance row whose totals exceed NUMERIC(15, 2)"
            );
            continue;
        }
        summaries.push(summary);
    }

    let unbalanced = summaries.iter().filter(|s| !s.balance.is_zero()).count();
    tracing::debug!(
        product_type = %query.product_type,
        rows = summaries.len(),
        unbalanced,
        "Built supply/disposition summary"
    );

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::sea_orm_active_enums::ProductType;
    use crate::entities::supply_disposition::fixtures::gasoline_balance;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_summarize_filters_and_totals() {
        let july = gasoline_balance();
        let august = supply_disposition::Model {
            id: 12,
            period_date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            production: dec!(9900.00),
            imports: dec!(650.00),
            stock_withdrawal: dec!(0),
            exports: dec!(800.00),
            product_supplied: dec!(9300.00),
            stock_build: dec!(450.00),
            ..july.clone()
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![july, august]])
            .into_connection();

        let query = SummaryQuery {
            product_type: ProductType::Gasoline,
            start_date: NaiveDate::from_ymd_opt(2024, 7, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 8, 31),
            region: None,
        };
        let summaries = summarize(&db, &query).await.unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].balance, dec!(624.20));
        assert_eq!(summaries[1].total_supply, dec!(10550.00));
        assert_eq!(summaries[1].total_disposition, dec!(10550.00));
        assert!(summaries[1].balance.is_zero());

        let log = db.into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("period_date"));
        assert!(sql.contains("GASOLINE"));
    }

    #[tokio::test]
    async fn test_summarize_skips_overflowing_totals() {
        let near_max = supply_disposition::Model {
            id: 13,
            production: dec!(9999999999999.99),
            imports: dec!(9999999999999.99),
            ..gasoline_balance()
        };
        assert!(near_max.validate().is_ok());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![gasoline_balance(), near_max]])
            .into_connection();
        let query = SummaryQuery {
            product_type: ProductType::Gasoline,
            start_date: None,
            end_date: None,
            region: None,
        };

        let summaries = summarize(&db, &query).await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].total_supply, dec!(10625.35));
        assert!(summaries.iter().all(|s| s.validate().is_ok()));
    }

    #[tokio::test]
    async fn test_summarize_no_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<supply_disposition::Model>::new()])
            .into_connection();
        let query = SummaryQuery {
            product_type: ProductType::Propane,
            start_date: None,
            end_date: None,
            region: Some("PADD 2".to_string()),
        };

        assert!(summarize(&db, &query).await.unwrap().is_empty());
    }
}
