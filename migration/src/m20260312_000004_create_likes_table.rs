use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Likes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Likes::AccountId).uuid().not_null())
                    .col(ColumnDef::new(Likes::ProjectId).uuid().not_null())
                    .col(
                        ColumnDef::new(Likes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_account")
                            .from(Likes::Table, Likes::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_project")
                            .from(Likes::Table, Likes::ProjectId)
                            .to(Projects::Table, Projects::Id),
                    )
                    // The pair is the primary key: an account either likes a
                    // project or it does not. Concurrent toggles race on this
                    // constraint, and ON CONFLICT targets it.
                    .primary_key(
                        Index::create()
                            .name("pk_likes")
                            .col(Likes::AccountId)
                            .col(Likes::ProjectId),
                    )
                    .to_owned(),
            )
            .await?;

        // Per-project like counts.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_likes_project_id
                ON likes (project_id);
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
                DROP INDEX IF EXISTS idx_likes_project_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Likes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Likes {
    Table,
    AccountId,
    ProjectId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}
