use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::like::application::ports::outgoing::{LikeRepository, LikeRepositoryError};

#[derive(Debug, Clone)]
pub enum ToggleLikeError {
    ProjectNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for ToggleLikeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleLikeError::ProjectNotFound => write!(f, "Project not found"),
            ToggleLikeError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ToggleLikeError {}

impl From<LikeRepositoryError> for ToggleLikeError {
    fn from(err: LikeRepositoryError) -> Self {
        match err {
            LikeRepositoryError::ProjectNotFound => ToggleLikeError::ProjectNotFound,
            LikeRepositoryError::DatabaseError(msg) => ToggleLikeError::RepositoryError(msg),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ToggleLikeResponse {
    /// Whether the caller likes the project after this call
    pub liked: bool,

    /// The project's like count after this call
    pub like_count: i64,
}

#[async_trait]
pub trait IToggleLikeUseCase: Send + Sync {
    async fn execute(
        &self,
        account_id: Uuid,
        project_id: Uuid,
    ) -> Result<ToggleLikeResponse, ToggleLikeError>;
}

pub struct ToggleLikeUseCase<R>
where
    R: LikeRepository + Send + Sync,
{
    repository: R,
}

impl<R> ToggleLikeUseCase<R>
where
    R: LikeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IToggleLikeUseCase for ToggleLikeUseCase<R>
where
    R: LikeRepository + Send + Sync,
{
    async fn execute(
        &self,
        account_id: Uuid,
        project_id: Uuid,
    ) -> Result<ToggleLikeResponse, ToggleLikeError> {
        let outcome = self.repository.toggle_like(account_id, project_id).await?;

        Ok(ToggleLikeResponse {
            liked: outcome.liked,
            like_count: outcome.like_count,
        })
    }
}
