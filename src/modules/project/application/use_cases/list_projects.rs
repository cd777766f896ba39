//! Read-side use cases over the projects table: the public feed plus the
//! owned and liked listings shown on a profile. They share one error type
//! since all three are thin wrappers over the same query port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::ports::outgoing::ProjectQuery;

#[derive(Debug, Clone)]
pub enum ListProjectsError {
    QueryError(String),
}

impl std::fmt::Display for ListProjectsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListProjectsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListProjectsError {}

#[async_trait]
pub trait IGetFeedUseCase: Send + Sync {
    async fn execute(&self, viewer: Option<Uuid>) -> Result<Vec<ProjectView>, ListProjectsError>;
}

#[async_trait]
pub trait IGetOwnedProjectsUseCase: Send + Sync {
    async fn execute(&self, account_id: Uuid) -> Result<Vec<ProjectView>, ListProjectsError>;
}

#[async_trait]
pub trait IGetLikedProjectsUseCase: Send + Sync {
    async fn execute(&self, account_id: Uuid) -> Result<Vec<ProjectView>, ListProjectsError>;
}

pub struct GetFeedUseCase<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetFeedUseCase<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetFeedUseCase for GetFeedUseCase<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, viewer: Option<Uuid>) -> Result<Vec<ProjectView>, ListProjectsError> {
        self.query
            .list_feed(viewer)
            .await
            .map_err(|e| ListProjectsError::QueryError(e.to_string()))
    }
}

pub struct GetOwnedProjectsUseCase<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetOwnedProjectsUseCase<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetOwnedProjectsUseCase for GetOwnedProjectsUseCase<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, account_id: Uuid) -> Result<Vec<ProjectView>, ListProjectsError> {
        self.query
            .list_owned(account_id)
            .await
            .map_err(|e| ListProjectsError::QueryError(e.to_string()))
    }
}

pub struct GetLikedProjectsUseCase<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetLikedProjectsUseCase<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetLikedProjectsUseCase for GetLikedProjectsUseCase<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, account_id: Uuid) -> Result<Vec<ProjectView>, ListProjectsError> {
        self.query
            .list_liked(account_id)
            .await
            .map_err(|e| ListProjectsError::QueryError(e.to_string()))
    }
}
