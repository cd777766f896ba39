use async_trait::async_trait;
use thiserror::Error;

use crate::modules::comment::application::domain::entities::CommentView;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentQuery: Send + Sync {
    /// The global comment stream, newest first.
    async fn list_comments(&self) -> Result<Vec<CommentView>, CommentQueryError>;
}
