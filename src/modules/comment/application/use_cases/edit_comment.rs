use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::comment::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError,
};
use crate::modules::comment::application::use_cases::post_comment::MAX_COMMENT_LENGTH;

#[derive(Debug, Clone)]
pub enum EditCommentError {
    EmptyBody,
    BodyTooLong,
    CommentNotFound,
    NotAuthor,
    RepositoryError(String),
}

impl std::fmt::Display for EditCommentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditCommentError::EmptyBody => write!(f, "Comment body must not be empty"),
            EditCommentError::BodyTooLong => {
                write!(f, "Comment body exceeds {} characters", MAX_COMMENT_LENGTH)
            }
            EditCommentError::CommentNotFound => write!(f, "Comment not found"),
            EditCommentError::NotAuthor => write!(f, "Caller is not the comment's author"),
            EditCommentError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for EditCommentError {}

impl From<CommentRepositoryError> for EditCommentError {
    fn from(err: CommentRepositoryError) -> Self {
        match err {
            CommentRepositoryError::CommentNotFound => EditCommentError::CommentNotFound,
            CommentRepositoryError::NotAuthor => EditCommentError::NotAuthor,
            CommentRepositoryError::DatabaseError(msg) => EditCommentError::RepositoryError(msg),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EditedComment {
    pub id: Uuid,
    pub body: String,
    pub edited_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait IEditCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        comment_id: Uuid,
        account_id: Uuid,
        body: String,
    ) -> Result<EditedComment, EditCommentError>;
}

pub struct EditCommentUseCase<R>
where
    R: CommentRepository + Send + Sync,
{
    repository: R,
}

impl<R> EditCommentUseCase<R>
where
    R: CommentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IEditCommentUseCase for EditCommentUseCase<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        comment_id: Uuid,
        account_id: Uuid,
        body: String,
    ) -> Result<EditedComment, EditCommentError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(EditCommentError::EmptyBody);
        }

        // Same cap as posting; an edit must not smuggle in what a post cannot.
        if body.chars().count() > MAX_COMMENT_LENGTH {
            return Err(EditCommentError::BodyTooLong);
        }

        let comment = self
            .repository
            .edit_comment(comment_id, account_id, body.to_string())
            .await?;

        Ok(EditedComment {
            id: comment.id,
            body: comment.body,
            edited_at: comment.edited_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::comment::application::domain::entities::Comment;
    use crate::modules::comment::application::ports::outgoing::NewComment;

    struct MockCommentRepository {
        result: Result<(), CommentRepositoryError>,
    }

    #[async_trait]
    impl CommentRepository for MockCommentRepository {
        async fn create_comment(
            &self,
            _comment: NewComment,
        ) -> Result<Comment, CommentRepositoryError> {
            unreachable!("editing never creates")
        }

        async fn edit_comment(
            &self,
            comment_id: Uuid,
            account_id: Uuid,
            body: String,
        ) -> Result<Comment, CommentRepositoryError> {
            self.result.clone()?;
            Ok(Comment {
                id: comment_id,
                account_id,
                body,
                created_at: Utc::now(),
                edited_at: Some(Utc::now()),
            })
        }
    }

    #[tokio::test]
    async fn test_edit_comment_success() {
        let use_case = EditCommentUseCase::new(MockCommentRepository { result: Ok(()) });
        let comment_id = Uuid::new_v4();

        let result = use_case
            .execute(comment_id, Uuid::new_v4(), "updated text".to_string())
            .await
            .unwrap();

        assert_eq!(result.id, comment_id);
        assert_eq!(result.body, "updated text");
        assert!(result.edited_at.is_some());
    }

    #[tokio::test]
    async fn test_edit_comment_rejects_blank_body() {
        let use_case = EditCommentUseCase::new(MockCommentRepository { result: Ok(()) });

        let result = use_case
            .execute(Uuid::new_v4(), Uuid::new_v4(), "  ".to_string())
            .await;
        assert!(matches!(result, Err(EditCommentError::EmptyBody)));
    }

    #[tokio::test]
    async fn test_edit_comment_rejects_oversized_body() {
        let use_case = EditCommentUseCase::new(MockCommentRepository { result: Ok(()) });

        let body = "x".repeat(MAX_COMMENT_LENGTH + 1);
        let result = use_case.execute(Uuid::new_v4(), Uuid::new_v4(), body).await;
        assert!(matches!(result, Err(EditCommentError::BodyTooLong)));
    }

    #[tokio::test]
    async fn test_edit_comment_wrong_author() {
        let use_case = EditCommentUseCase::new(MockCommentRepository {
            result: Err(CommentRepositoryError::NotAuthor),
        });

        let result = use_case
            .execute(Uuid::new_v4(), Uuid::new_v4(), "updated".to_string())
            .await;
        assert!(matches!(result, Err(EditCommentError::NotAuthor)));
    }

    #[tokio::test]
    async fn test_edit_comment_not_found() {
        let use_case = EditCommentUseCase::new(MockCommentRepository {
            result: Err(CommentRepositoryError::CommentNotFound),
        });

        let result = use_case
            .execute(Uuid::new_v4(), Uuid::new_v4(), "updated".to_string())
            .await;
        assert!(matches!(result, Err(EditCommentError::CommentNotFound)));
    }
}
