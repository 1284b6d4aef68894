pub use sea_orm_migration::prelude::*;

mod m20250914_000001_create_seminar_table;
mod m20250928_000002_create_attendance_tables;
mod m20251012_000003_create_evaluation_certificate_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250914_000001_create_seminar_table::Migration),
            Box::new(m20250928_000002_create_attendance_tables::Migration),
            Box::new(m20251012_000003_create_evaluation_certificate_tables::Migration),
        ]
    }
}
