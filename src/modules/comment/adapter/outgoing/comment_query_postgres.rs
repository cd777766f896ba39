use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::comment::application::domain::entities::CommentView;
use crate::modules::comment::application::ports::outgoing::{CommentQuery, CommentQueryError};

#[derive(Debug, FromQueryResult)]
struct CommentViewRow {
    id: Uuid,
    author_id: Uuid,
    author_username: String,
    body: String,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
    edited_at: Option<sea_orm::prelude::DateTimeWithTimeZone>,
}

#[derive(Clone, Debug)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn list_comments(&self) -> Result<Vec<CommentView>, CommentQueryError> {
        let rows = CommentViewRow::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            "SELECT c.id, c.account_id AS author_id, a.username AS author_username, \
             c.body, c.created_at, c.edited_at \
             FROM comments c \
             JOIN accounts a ON a.id = c.account_id \
             ORDER BY c.created_at DESC",
        ))
        .all(&*self.db)
        .await
        .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| CommentView {
                id: row.id,
                author_id: row.author_id,
                author_username: row.author_username,
                body: row.body,
                created_at: row.created_at.with_timezone(&chrono::Utc),
                edited_at: row.edited_at.map(|t| t.with_timezone(&chrono::Utc)),
            })
            .collect())
    }
}
