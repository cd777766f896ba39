use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// State of the like after a toggle, as persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub liked: bool,
    pub like_count: i64,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LikeRepositoryError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Flip `account_id`'s like on `project_id` and report the new state
    /// together with the project's total like count.
    async fn toggle_like(
        &self,
        account_id: Uuid,
        project_id: Uuid,
    ) -> Result<ToggleOutcome, LikeRepositoryError>;
}
