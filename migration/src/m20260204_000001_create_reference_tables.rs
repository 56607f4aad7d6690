use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Monthly seasonal factors per product/disposition (and optionally region)
        manager
            .create_table(
                Table::create()
                    .table(SeasonalPatterns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SeasonalPatterns::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SeasonalPatterns::ProductType).string_len(20).not_null())
                    .col(ColumnDef::new(SeasonalPatterns::DispositionType).string_len(20).not_null())
                    .col(
                        ColumnDef::new(SeasonalPatterns::Month)
                            .integer()
                            .not_null()
                            .check(Expr::col(SeasonalPatterns::Month).between(1, 12)),
                    )
                    .col(ColumnDef::new(SeasonalPatterns::Region).string_len(100).null())
                    .col(ColumnDef::new(SeasonalPatterns::SeasonalIndex).decimal_len(6, 4).not_null())
                    .col(
                        ColumnDef::new(SeasonalPatterns::TrendFactor)
                            .decimal_len(6, 4)
                            .not_null()
                            .default(Expr::cust("1.0")),
                    )
                    .col(
                        ColumnDef::new(SeasonalPatterns::VolatilityMultiplier)
                            .decimal_len(6, 4)
                            .not_null()
                            .default(Expr::cust("1.0")),
                    )
                    .col(
                        ColumnDef::new(SeasonalPatterns::YearsOfData)
                            .integer()
                            .not_null()
                            .default(10)
                            .check(Expr::col(SeasonalPatterns::YearsOfData).gte(1)),
                    )
                    .col(
                        ColumnDef::new(SeasonalPatterns::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(SeasonalPatterns::CreatedAt)
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
                    .name("idx_seasonal_patterns_lookup")
                    .table(SeasonalPatterns::Table)
                    .col(SeasonalPatterns::ProductType)
                    .col(SeasonalPatterns::DispositionType)
                    .col(SeasonalPatterns::Month)
                    .to_owned(),
            )
            .await?;

        // Calibration data from past landfalls
        manager
            .create_table(
                Table::create()
                    .table(HurricaneHistorical::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HurricaneHistorical::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HurricaneHistorical::HurricaneName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(HurricaneHistorical::Year)
                            .integer()
                            .not_null()
                            .check(Expr::col(HurricaneHistorical::Year).gte(1950)),
                    )
                    .col(
                        ColumnDef::new(HurricaneHistorical::Category)
                            .integer()
                            .not_null()
                            .check(Expr::col(HurricaneHistorical::Category).between(1, 5)),
                    )
                    .col(ColumnDef::new(HurricaneHistorical::LandfallDate).date().not_null())
                    .col(
                        ColumnDef::new(HurricaneHistorical::AffectedRegions)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'")),
                    )
                    .col(
                        ColumnDef::new(HurricaneHistorical::RefineryCapacityLostPct)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(HurricaneHistorical::ProductionDisruptionDays)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(HurricaneHistorical::PriceSpikeGasolinePct)
                            .decimal_len(8, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(HurricaneHistorical::PriceSpikeCrudePct)
                            .decimal_len(8, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(HurricaneHistorical::RecoveryDaysProduction)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(HurricaneHistorical::RecoveryDaysRefining)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(HurricaneHistorical::Notes).string_len(1000).null())
                    .col(
                        ColumnDef::new(HurricaneHistorical::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HurricaneHistorical::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SeasonalPatterns::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SeasonalPatterns {
    Table,
    Id,
    ProductType,
    DispositionType,
    Month,
    Region,
    SeasonalIndex,
    TrendFactor,
    VolatilityMultiplier,
    YearsOfData,
    LastUpdated,
    CreatedAt,
}

#[derive(Iden)]
enum HurricaneHistorical {
    Table,
    Id,
    HurricaneName,
    Year,
    Category,
    LandfallDate,
    AffectedRegions,
    RefineryCapacityLostPct,
    ProductionDisruptionDays,
    PriceSpikeGasolinePct,
    PriceSpikeCrudePct,
    RecoveryDaysProduction,
    RecoveryDaysRefining,
    Notes,
    CreatedAt,
}
