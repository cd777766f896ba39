use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::AccountId).uuid().not_null())
                    .col(ColumnDef::new(Projects::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(
                        ColumnDef::new(Projects::ArtifactName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::ArtifactPath)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::ImageUrl)
                            .string_len(512)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_account")
                            .from(Projects::Table, Projects::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Owner-scoped listings ("my projects").
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_projects_account_id
                ON projects (account_id);
                "#,
            )
            .await?;

        // Recency tie-break in the feed ordering.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_projects_created_at
                ON projects (created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_projects_account_id;
                DROP INDEX IF EXISTS idx_projects_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    AccountId,
    Name,
    Description,
    ArtifactName,
    ArtifactPath,
    ImageUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
}
