use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scenarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scenarios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Scenarios::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Scenarios::Description).string_len(1000).not_null())
                    .col(ColumnDef::new(Scenarios::ScenarioType).string_len(20).not_null())
                    .col(ColumnDef::new(Scenarios::SeverityLevel).string_len(20).not_null())
                    .col(ColumnDef::new(Scenarios::StartDate).date().not_null())
                    .col(ColumnDef::new(Scenarios::EndDate).date().not_null())
                    // Saffir-Simpson scale
                    .col(
                        ColumnDef::new(Scenarios::HurricaneCategory)
                            .integer()
                            .null()
                            .check(Expr::col(Scenarios::HurricaneCategory).between(1, 5)),
                    )
                    .col(
                        ColumnDef::new(Scenarios::AffectedRegions)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'")),
                    )
                    .col(
                        ColumnDef::new(Scenarios::ProductionImpactPct)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Scenarios::RefiningCapacityImpactPct)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Scenarios::ImportDisruptionPct)
                            .decimal_len(5, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Scenarios::Parameters)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'")),
                    )
                    .col(
                        ColumnDef::new(Scenarios::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Scenarios::CreatedBy).string_len(100).null())
                    .col(
                        ColumnDef::new(Scenarios::CreatedAt)
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
                    .table(ScenarioImpacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScenarioImpacts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScenarioImpacts::ScenarioId).integer().not_null())
                    .col(ColumnDef::new(ScenarioImpacts::ProductType).string_len(20).not_null())
                    .col(ColumnDef::new(ScenarioImpacts::DispositionType).string_len(20).not_null())
                    .col(ColumnDef::new(ScenarioImpacts::ImpactDate).date().not_null())
                    .col(ColumnDef::new(ScenarioImpacts::BaselineValue).decimal_len(15, 2).not_null())
                    .col(ColumnDef::new(ScenarioImpacts::ScenarioValue).decimal_len(15, 2).not_null())
                    .col(ColumnDef::new(ScenarioImpacts::ImpactAbsolute).decimal_len(15, 2).not_null())
                    .col(ColumnDef::new(ScenarioImpacts::ImpactPercentage).decimal_len(5, 2).not_null())
                    .col(ColumnDef::new(ScenarioImpacts::Unit).string_len(50).not_null())
                    .col(ColumnDef::new(ScenarioImpacts::Region).string_len(100).null())
                    .col(
                        ColumnDef::new(ScenarioImpacts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scenario_impacts_scenario")
                            .from(ScenarioImpacts::Table, ScenarioImpacts::ScenarioId)
                            .to(Scenarios::Table, Scenarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scenario_impacts_scenario_date")
                    .table(ScenarioImpacts::Table)
                    .col(ScenarioImpacts::ScenarioId)
                    .col(ScenarioImpacts::ImpactDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScenarioImpacts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Scenarios::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Scenarios {
    Table,
    Id,
    Name,
    Description,
    ScenarioType,
    SeverityLevel,
    StartDate,
    EndDate,
    HurricaneCategory,
    AffectedRegions,
    ProductionImpactPct,
    RefiningCapacityImpactPct,
    ImportDisruptionPct,
    Parameters,
    IsActive,
    CreatedBy,
    CreatedAt,
}

#[derive(Iden)]
enum ScenarioImpacts {
    Table,
    Id,
    ScenarioId,
    ProductType,
    DispositionType,
    ImpactDate,
    BaselineValue,
    ScenarioValue,
    ImpactAbsolute,
    ImpactPercentage,
    Unit,
    Region,
    CreatedAt,
}
