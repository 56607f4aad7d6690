pub use sea_orm_migration::prelude::*;

mod m20260202_000001_create_observation_tables;
mod m20260202_000002_create_supply_disposition;
mod m20260203_000001_create_scenarios;
mod m20260203_000002_create_pricing_tables;
mod m20260204_000001_create_reference_tables;
mod m20260204_000002_create_dashboard_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260202_000001_create_observation_tables::Migration),
            Box::new(m20260202_000002_create_supply_disposition::Migration),
            Box::new(m20260203_000001_create_scenarios::Migration),
            Box::new(m20260203_000002_create_pricing_tables::Migration),
            Box::new(m20260204_000001_create_reference_tables::Migration),
            Box::new(m20260204_000002_create_dashboard_tables::Migration),
        ]
    }
}
