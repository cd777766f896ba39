use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone)]
pub struct NewProject {
    pub account_id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub artifact_name: String,
    pub artifact_path: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectRepositoryError {
    #[error("Owner account not found")]
    OwnerNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, project: NewProject) -> Result<Project, ProjectRepositoryError>;
}
