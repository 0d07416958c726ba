//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_images;
mod m20250101_000002_create_skills;
mod m20250101_000003_create_projects;
mod m20250101_000004_create_project_skills;
mod m20250101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_images::Migration),
            Box::new(m20250101_000002_create_skills::Migration),
            Box::new(m20250101_000003_create_projects::Migration),
            // Join table references both projects and skills
            Box::new(m20250101_000004_create_project_skills::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000005_add_indexes::Migration),
        ]
    }
}
