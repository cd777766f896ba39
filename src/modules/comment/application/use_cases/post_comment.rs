use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::comment::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, NewComment,
};

pub(crate) const MAX_COMMENT_LENGTH: usize = 4000;

#[derive(Debug, Clone)]
pub enum PostCommentError {
    EmptyBody,
    BodyTooLong,
    RepositoryError(String),
}

impl std::fmt::Display for PostCommentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostCommentError::EmptyBody => write!(f, "Comment body must not be empty"),
            PostCommentError::BodyTooLong => {
                write!(f, "Comment body exceeds {} characters", MAX_COMMENT_LENGTH)
            }
            PostCommentError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for PostCommentError {}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostedComment {
    pub id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait IPostCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        account_id: Uuid,
        body: String,
    ) -> Result<PostedComment, PostCommentError>;
}

pub struct PostCommentUseCase<R>
where
    R: CommentRepository + Send + Sync,
{
    repository: R,
}

impl<R> PostCommentUseCase<R>
where
    R: CommentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IPostCommentUseCase for PostCommentUseCase<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        account_id: Uuid,
        body: String,
    ) -> Result<PostedComment, PostCommentError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(PostCommentError::EmptyBody);
        }
        if body.chars().count() > MAX_COMMENT_LENGTH {
            return Err(PostCommentError::BodyTooLong);
        }

        let comment = self
            .repository
            .create_comment(NewComment {
                account_id,
                body: body.to_string(),
            })
            .await
            .map_err(|e| match e {
                CommentRepositoryError::DatabaseError(msg) => {
                    PostCommentError::RepositoryError(msg)
                }
                other => PostCommentError::RepositoryError(other.to_string()),
            })?;

        Ok(PostedComment {
            id: comment.id,
            body: comment.body,
            created_at: comment.created_at,
        })
    }
}
