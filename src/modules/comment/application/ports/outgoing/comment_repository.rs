use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::comment::application::domain::entities::Comment;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub account_id: Uuid,
    pub body: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommentRepositoryError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Caller is not the comment's author")]
    NotAuthor,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(&self, comment: NewComment) -> Result<Comment, CommentRepositoryError>;

    /// Replace the body of `comment_id`, but only when `account_id` wrote it.
    async fn edit_comment(
        &self,
        comment_id: Uuid,
        account_id: Uuid,
        body: String,
    ) -> Result<Comment, CommentRepositoryError>;
}
