pub use sea_orm_migration::prelude::*;

mod m20260818_create_clinic_tables;
mod m20260819_add_clinic_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260818_create_clinic_tables::Migration),
            Box::new(m20260819_add_clinic_indexes::Migration),
        ]
    }
}
