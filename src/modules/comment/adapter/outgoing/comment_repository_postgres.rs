use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Set,
    Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::comment::application::domain::entities::Comment;
use crate::modules::comment::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, NewComment,
};

use super::sea_orm_entity::comments::{ActiveModel as CommentActiveModel, Model as CommentModel};

#[derive(Debug, FromQueryResult)]
struct UpdatedCommentRow {
    id: Uuid,
    account_id: Uuid,
    body: String,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
    edited_at: Option<sea_orm::prelude::DateTimeWithTimeZone>,
}

#[derive(Clone, Debug)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_comment(model: CommentModel) -> Comment {
        Comment {
            id: model.id,
            account_id: model.account_id,
            body: model.body,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            edited_at: model.edited_at.map(|t| t.with_timezone(&chrono::Utc)),
        }
    }
}

fn db_err(e: impl std::fmt::Display) -> CommentRepositoryError {
    CommentRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create_comment(&self, comment: NewComment) -> Result<Comment, CommentRepositoryError> {
        let active_comment = CommentActiveModel {
            id: Set(Uuid::new_v4()),
            account_id: Set(comment.account_id),
            body: Set(comment.body),
            created_at: Set(chrono::Utc::now().into()),
            edited_at: Set(None),
        };

        let inserted = active_comment.insert(&*self.db).await.map_err(db_err)?;

        Ok(Self::map_to_comment(inserted))
    }

    async fn edit_comment(
        &self,
        comment_id: Uuid,
        account_id: Uuid,
        body: String,
    ) -> Result<Comment, CommentRepositoryError> {
        // The author check lives in the WHERE clause, so the update itself
        // is the authorization gate. A miss is disambiguated afterwards.
        let updated = UpdatedCommentRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "UPDATE comments SET body = $3, edited_at = NOW() \
             WHERE id = $1 AND account_id = $2 \
             RETURNING id, account_id, body, created_at, edited_at",
            [comment_id.into(), account_id.into(), body.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(db_err)?;

        if let Some(row) = updated {
            return Ok(Comment {
                id: row.id,
                account_id: row.account_id,
                body: row.body,
                created_at: row.created_at.with_timezone(&chrono::Utc),
                edited_at: row.edited_at.map(|t| t.with_timezone(&chrono::Utc)),
            });
        }

        let exists = self
            .db
            .query_one(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "SELECT id FROM comments WHERE id = $1",
                [comment_id.into()],
            ))
            .await
            .map_err(db_err)?;

        if exists.is_some() {
            Err(CommentRepositoryError::NotAuthor)
        } else {
            Err(CommentRepositoryError::CommentNotFound)
        }
    }
}
