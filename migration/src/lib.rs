pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_project_configs_table;
mod m20240101_000002_create_projects_table;
mod m20240101_000003_create_oauth_provider_configs_table;
mod m20240101_000004_create_email_service_configs_table;
mod m20240101_000005_create_project_domains_table;
mod m20240101_000006_create_project_users_table;
mod m20240101_000007_insert_internal_project;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_project_configs_table::Migration),
            Box::new(m20240101_000002_create_projects_table::Migration),
            Box::new(m20240101_000003_create_oauth_provider_configs_table::Migration),
            Box::new(m20240101_000004_create_email_service_configs_table::Migration),
            Box::new(m20240101_000005_create_project_domains_table::Migration),
            Box::new(m20240101_000006_create_project_users_table::Migration),
            Box::new(m20240101_000007_insert_internal_project::Migration),
        ]
    }
}
