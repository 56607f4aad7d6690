use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Raw EIA observations, the only mutable observation table
        manager
            .create_table(
                Table::create()
                    .table(EiaDataPoints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EiaDataPoints::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EiaDataPoints::SeriesId).string_len(100).not_null())
                    .col(ColumnDef::new(EiaDataPoints::DataSource).string_len(20).not_null())
                    .col(ColumnDef::new(EiaDataPoints::ProductType).string_len(20).not_null())
                    .col(ColumnDef::new(EiaDataPoints::DispositionType).string_len(20).not_null())
                    .col(ColumnDef::new(EiaDataPoints::PeriodDate).date().not_null())
                    .col(ColumnDef::new(EiaDataPoints::Value).decimal_len(15, 2).not_null())
                    .col(ColumnDef::new(EiaDataPoints::Unit).string_len(50).not_null())
                    .col(ColumnDef::new(EiaDataPoints::Region).string_len(100).null())
                    .col(
                        ColumnDef::new(EiaDataPoints::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(EiaDataPoints::UpdatedAt)
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
                    .name("idx_eia_data_points_series_id")
                    .table(EiaDataPoints::Table)
                    .col(EiaDataPoints::SeriesId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_eia_data_points_period_date")
                    .table(EiaDataPoints::Table)
                    .col(EiaDataPoints::PeriodDate)
                    .to_owned(),
            )
            .await?;

        // Short-Term Energy Outlook forecasts
        manager
            .create_table(
                Table::create()
                    .table(SteoData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SteoData::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SteoData::SeriesId).string_len(100).not_null())
                    .col(ColumnDef::new(SteoData::ProductType).string_len(20).not_null())
                    .col(ColumnDef::new(SteoData::ForecastPeriod).date().not_null())
                    .col(ColumnDef::new(SteoData::ForecastValue).decimal_len(15, 2).not_null())
                    .col(ColumnDef::new(SteoData::Unit).string_len(50).not_null())
                    .col(ColumnDef::new(SteoData::ConfidenceIntervalLow).decimal_len(15, 2).null())
                    .col(ColumnDef::new(SteoData::ConfidenceIntervalHigh).decimal_len(15, 2).null())
                    .col(
                        ColumnDef::new(SteoData::CreatedAt)
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
                    .name("idx_steo_data_series_id")
                    .table(SteoData::Table)
                    .col(SteoData::SeriesId)
                    .to_owned(),
            )
            .await?;

        // Petroleum Supply Monthly
        manager
            .create_table(
                Table::create()
                    .table(PsmData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PsmData::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PsmData::SeriesId).string_len(100).not_null())
                    .col(ColumnDef::new(PsmData::ProductType).string_len(20).not_null())
                    .col(ColumnDef::new(PsmData::DispositionType).string_len(20).not_null())
                    .col(ColumnDef::new(PsmData::ReportMonth).date().not_null())
                    .col(ColumnDef::new(PsmData::Value).decimal_len(15, 2).not_null())
                    .col(ColumnDef::new(PsmData::Unit).string_len(50).not_null())
                    .col(
                        ColumnDef::new(PsmData::RevisionFlag)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PsmData::CreatedAt)
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
                    .name("idx_psm_data_series_id")
                    .table(PsmData::Table)
                    .col(PsmData::SeriesId)
                    .to_owned(),
            )
            .await?;

        // Weekly Petroleum Status Report
        manager
            .create_table(
                Table::create()
                    .table(WeeklyData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WeeklyData::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WeeklyData::SeriesId).string_len(100).not_null())
                    .col(ColumnDef::new(WeeklyData::ProductType).string_len(20).not_null())
                    .col(ColumnDef::new(WeeklyData::DispositionType).string_len(20).not_null())
                    .col(ColumnDef::new(WeeklyData::WeekEnding).date().not_null())
                    .col(ColumnDef::new(WeeklyData::Value).decimal_len(15, 2).not_null())
                    .col(ColumnDef::new(WeeklyData::Unit).string_len(50).not_null())
                    .col(ColumnDef::new(WeeklyData::SeasonalAdjustment).string_len(50).null())
                    .col(
                        ColumnDef::new(WeeklyData::CreatedAt)
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
                    .name("idx_weekly_data_series_id")
                    .table(WeeklyData::Table)
                    .col(WeeklyData::SeriesId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_weekly_data_week_ending")
                    .table(WeeklyData::Table)
                    .col(WeeklyData::WeekEnding)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeeklyData::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PsmData::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SteoData::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EiaDataPoints::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EiaDataPoints {
    Table,
    Id,
    SeriesId,
    DataSource,
    ProductType,
    DispositionType,
    PeriodDate,
    Value,
    Unit,
    Region,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum SteoData {
    Table,
    Id,
    SeriesId,
    ProductType,
    ForecastPeriod,
    ForecastValue,
    Unit,
    ConfidenceIntervalLow,
    ConfidenceIntervalHigh,
    CreatedAt,
}

#[derive(Iden)]
enum PsmData {
    Table,
    Id,
    SeriesId,
    ProductType,
    DispositionType,
    ReportMonth,
    Value,
    Unit,
    RevisionFlag,
    CreatedAt,
}

#[derive(Iden)]
enum WeeklyData {
    Table,
    Id,
    SeriesId,
    ProductType,
    DispositionType,
    WeekEnding,
    Value,
    Unit,
    SeasonalAdjustment,
    CreatedAt,
}
