use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::like::application::ports::outgoing::{
    LikeRepository, LikeRepositoryError, ToggleOutcome,
};

#[derive(Clone, Debug)]
pub struct LikeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LikeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: impl std::fmt::Display) -> LikeRepositoryError {
    LikeRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl LikeRepository for LikeRepositoryPostgres {
    async fn toggle_like(
        &self,
        account_id: Uuid,
        project_id: Uuid,
    ) -> Result<ToggleOutcome, LikeRepositoryError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let project = txn
            .query_one(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "SELECT id FROM projects WHERE id = $1",
                [project_id.into()],
            ))
            .await
            .map_err(db_err)?;

        if project.is_none() {
            txn.rollback().await.map_err(db_err)?;
            return Err(LikeRepositoryError::ProjectNotFound);
        }

        // Delete-then-insert keeps the toggle race-free: whichever statement
        // touched a row decides the new state, and the composite primary key
        // absorbs concurrent inserts.
        let deleted = txn
            .execute(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "DELETE FROM likes WHERE account_id = $1 AND project_id = $2",
                [account_id.into(), project_id.into()],
            ))
            .await
            .map_err(db_err)?;

        let liked = if deleted.rows_affected() == 0 {
            txn.execute(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "INSERT INTO likes (account_id, project_id, created_at) \
                 VALUES ($1, $2, NOW()) \
                 ON CONFLICT (account_id, project_id) DO NOTHING",
                [account_id.into(), project_id.into()],
            ))
            .await
            .map_err(db_err)?;
            true
        } else {
            false
        };

        let count_row = txn
            .query_one(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "SELECT COUNT(*) AS like_count FROM likes WHERE project_id = $1",
                [project_id.into()],
            ))
            .await
            .map_err(db_err)?
            .ok_or_else(|| LikeRepositoryError::DatabaseError("count returned no row".to_string()))?;

        let like_count: i64 = count_row.try_get("", "like_count").map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        Ok(ToggleOutcome { liked, like_count })
    }
}
