use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Observed prices (spot, futures, retail, wholesale)
        manager
            .create_table(
                Table::create()
                    .table(PriceData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PriceData::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PriceData::ProductType).string_len(20).not_null())
                    .col(ColumnDef::new(PriceData::PriceDate).date().not_null())
                    .col(ColumnDef::new(PriceData::Price).decimal_len(10, 4).not_null())
                    .col(ColumnDef::new(PriceData::PriceType).string_len(50).not_null())
                    .col(ColumnDef::new(PriceData::Location).string_len(100).not_null())
                    .col(ColumnDef::new(PriceData::Unit).string_len(50).not_null())
                    .col(ColumnDef::new(PriceData::Volume).decimal_len(15, 2).null())
                    .col(ColumnDef::new(PriceData::OpenInterest).decimal_len(15, 2).null())
                    .col(ColumnDef::new(PriceData::Volatility).decimal_len(8, 4).null())
                    .col(
                        ColumnDef::new(PriceData::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_price_data_product_date")
                    .table(PriceData::Table)
                    .col(PriceData::ProductType)
                    .col((PriceData::PriceDate, IndexOrder::Desc))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PriceForecasts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PriceForecasts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PriceForecasts::ScenarioId).integer().null())
                    .col(ColumnDef::new(PriceForecasts::ProductType).string_len(20).not_null())
                    .col(ColumnDef::new(PriceForecasts::ForecastDate).date().not_null())
                    .col(ColumnDef::new(PriceForecasts::ForecastPrice).decimal_len(10, 4).not_null())
                    .col(ColumnDef::new(PriceForecasts::BaselinePrice).decimal_len(10, 4).not_null())
                    .col(ColumnDef::new(PriceForecasts::PriceImpact).decimal_len(10, 4).not_null())
                    .col(ColumnDef::new(PriceForecasts::PriceImpactPct).decimal_len(5, 2).not_null())
                    .col(ColumnDef::new(PriceForecasts::ConfidenceLevel).decimal_len(5, 2).null())
                    .col(ColumnDef::new(PriceForecasts::PriceType).string_len(50).not_null())
                    .col(ColumnDef::new(PriceForecasts::Location).string_len(100).not_null())
                    .col(ColumnDef::new(PriceForecasts::Unit).string_len(50).not_null())
                    .col(
                        ColumnDef::new(PriceForecasts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_price_forecasts_scenario")
                            .from(PriceForecasts::Table, PriceForecasts::ScenarioId)
                            .to(Scenarios::Table, Scenarios::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_price_forecasts_scenario_date")
                    .table(PriceForecasts::Table)
                    .col(PriceForecasts::ScenarioId)
                    .col(PriceForecasts::ForecastDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PriceForecasts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PriceData::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PriceData {
    Table,
    Id,
    ProductType,
    PriceDate,
    Price,
    PriceType,
    Location,
    Unit,
    Volume,
    OpenInterest,
    Volatility,
    CreatedAt,
}

#[derive(Iden)]
enum PriceForecasts {
    Table,
    Id,
    ScenarioId,
    ProductType,
    ForecastDate,
    ForecastPrice,
    BaselinePrice,
    PriceImpact,
    PriceImpactPct,
    ConfidenceLevel,
    PriceType,
    Location,
    Unit,
    CreatedAt,
}

#[derive(Iden)]
enum Scenarios {
    Table,
    Id,
}
