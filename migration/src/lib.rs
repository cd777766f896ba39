pub use sea_orm_migration::prelude::*;

mod m20260312_000001_create_accounts_table;
mod m20260312_000002_create_projects_table;
mod m20260312_000003_create_comments_table;
mod m20260312_000004_create_likes_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260312_000001_create_accounts_table::Migration),
            Box::new(m20260312_000002_create_projects_table::Migration),
            Box::new(m20260312_000003_create_comments_table::Migration),
            Box::new(m20260312_000004_create_likes_table::Migration),
        ]
    }
}
