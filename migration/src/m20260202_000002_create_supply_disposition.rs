use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(SupplyDisposition::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(SupplyDisposition::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(SupplyDisposition::ProductType).string_len(20).not_null())
            .col(ColumnDef::new(SupplyDisposition::PeriodDate).date().not_null())
            .col(ColumnDef::new(SupplyDisposition::DataPointId).integer().null());

        // Supply side, then disposition side; all default to zero
        for column in [
            SupplyDisposition::Production,
            SupplyDisposition::Imports,
            SupplyDisposition::StockWithdrawal,
            SupplyDisposition::Exports,
            SupplyDisposition::RefineryInput,
            SupplyDisposition::ProductSupplied,
            SupplyDisposition::StockBuild,
        ] {
            table.col(
                ColumnDef::new(column)
                    .decimal_len(15, 2)
                    .not_null()
                    .default(0),
            );
        }

        table
            .col(ColumnDef::new(SupplyDisposition::Unit).string_len(50).not_null())
            .col(ColumnDef::new(SupplyDisposition::Region).string_len(100).null())
            .col(
                ColumnDef::new(SupplyDisposition::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_supply_disposition_data_point")
                    .from(SupplyDisposition::Table, SupplyDisposition::DataPointId)
                    .to(EiaDataPoints::Table, EiaDataPoints::Id)
                    .on_delete(ForeignKeyAction::SetNull),
            );

        manager.create_table(table.to_owned()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_supply_disposition_product_period")
                    .table(SupplyDisposition::Table)
                    .col(SupplyDisposition::ProductType)
                    .col(SupplyDisposition::PeriodDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SupplyDisposition::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SupplyDisposition {
    Table,
    Id,
    ProductType,
    PeriodDate,
    DataPointId,
    Production,
    Imports,
    StockWithdrawal,
    Exports,
    RefineryInput,
    ProductSupplied,
    StockBuild,
    Unit,
    Region,
    CreatedAt,
}

#[derive(Iden)]
enum EiaDataPoints {
    Table,
    Id,
}
