use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DashboardConfig::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DashboardConfig::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DashboardConfig::ConfigName)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(DashboardConfig::DashboardType).string_len(50).not_null())
                    .col(
                        ColumnDef::new(DashboardConfig::ChartConfigs)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(
                        ColumnDef::new(DashboardConfig::DataFilters)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(
                        ColumnDef::new(DashboardConfig::RefreshIntervalMinutes)
                            .integer()
                            .not_null()
                            .default(60),
                    )
                    .col(
                        ColumnDef::new(DashboardConfig::DefaultDateRangeDays)
                            .integer()
                            .not_null()
                            .default(365),
                    )
                    .col(
                        ColumnDef::new(DashboardConfig::IncludeForecasts)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(DashboardConfig::IncludeScenarios)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(DashboardConfig::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(DashboardConfig::CreatedBy).string_len(100).null())
                    .col(
                        ColumnDef::new(DashboardConfig::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(DashboardConfig::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ReportTemplates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReportTemplates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ReportTemplates::TemplateName).string_len(200).not_null())
                    .col(ColumnDef::new(ReportTemplates::ReportType).string_len(50).not_null())
                    .col(
                        ColumnDef::new(ReportTemplates::DataSources)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'")),
                    )
                    .col(
                        ColumnDef::new(ReportTemplates::ProductsIncluded)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'")),
                    )
                    .col(
                        ColumnDef::new(ReportTemplates::RegionsIncluded)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'")),
                    )
                    .col(
                        ColumnDef::new(ReportTemplates::OutputFormat)
                            .string_len(20)
                            .not_null()
                            .default("PDF"),
                    )
                    .col(
                        ColumnDef::new(ReportTemplates::ChartSpecifications)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(ColumnDef::new(ReportTemplates::SchedulePattern).string_len(100).null())
                    .col(
                        ColumnDef::new(ReportTemplates::AutoSend)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ReportTemplates::Recipients)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'")),
                    )
                    .col(
                        ColumnDef::new(ReportTemplates::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(ReportTemplates::CreatedBy).string_len(100).null())
                    .col(
                        ColumnDef::new(ReportTemplates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DataAlerts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DataAlerts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DataAlerts::AlertName).string_len(200).not_null())
                    .col(ColumnDef::new(DataAlerts::AlertType).string_len(50).not_null())
                    .col(ColumnDef::new(DataAlerts::ProductType).string_len(20).null())
                    .col(ColumnDef::new(DataAlerts::ThresholdValue).decimal_len(15, 4).null())
                    .col(ColumnDef::new(DataAlerts::ThresholdOperator).string_len(10).null())
                    .col(
                        ColumnDef::new(DataAlerts::CheckFrequencyMinutes)
                            .integer()
                            .not_null()
                            .default(60),
                    )
                    .col(
                        ColumnDef::new(DataAlerts::CooldownHours)
                            .integer()
                            .not_null()
                            .default(24),
                    )
                    .col(
                        ColumnDef::new(DataAlerts::SeverityLevel)
                            .string_len(20)
                            .not_null()
                            .default("MODERATE"),
                    )
                    .col(
                        ColumnDef::new(DataAlerts::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(DataAlerts::LastTriggered)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DataAlerts::CreatedAt)
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
            .drop_table(Table::drop().table(DataAlerts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ReportTemplates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DashboardConfig::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DashboardConfig {
    Table,
    Id,
    ConfigName,
    DashboardType,
    ChartConfigs,
    DataFilters,
    RefreshIntervalMinutes,
    DefaultDateRangeDays,
    IncludeForecasts,
    IncludeScenarios,
    IsActive,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ReportTemplates {
    Table,
    Id,
    TemplateName,
    ReportType,
    DataSources,
    ProductsIncluded,
    RegionsIncluded,
    OutputFormat,
    ChartSpecifications,
    SchedulePattern,
    AutoSend,
    Recipients,
    IsActive,
    CreatedBy,
    CreatedAt,
}

#[derive(Iden)]
enum DataAlerts {
    Table,
    Id,
    AlertName,
    AlertType,
    ProductType,
    ThresholdValue,
    ThresholdOperator,
    CheckFrequencyMinutes,
    CooldownHours,
    SeverityLevel,
    IsActive,
    LastTriggered,
    CreatedAt,
}
