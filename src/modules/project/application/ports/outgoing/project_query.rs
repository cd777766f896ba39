use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectView;

/// Where a project's artifact lives, as recorded at upload time.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactRecord {
    pub file_name: String,
    pub path: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the projects table. All listings are ranked by like count
/// descending, with newer projects first among ties.
#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Every project on the site, with `liked` resolved against `viewer`.
    async fn list_feed(&self, viewer: Option<Uuid>) -> Result<Vec<ProjectView>, ProjectQueryError>;

    /// Projects uploaded by `account_id`.
    async fn list_owned(&self, account_id: Uuid) -> Result<Vec<ProjectView>, ProjectQueryError>;

    /// Projects `account_id` has liked.
    async fn list_liked(&self, account_id: Uuid) -> Result<Vec<ProjectView>, ProjectQueryError>;

    async fn find_artifact(
        &self,
        project_id: Uuid,
    ) -> Result<Option<ArtifactRecord>, ProjectQueryError>;
}
