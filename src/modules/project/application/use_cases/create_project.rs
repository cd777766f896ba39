use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::{
    ArtifactStore, ArtifactStoreError, NewProject, ProjectRepository, ProjectRepositoryError,
};

#[derive(Debug, Clone)]
pub enum CreateProjectError {
    InvalidName,
    InvalidDescription,
    InvalidImageUrl,
    MissingArtifact,
    InvalidArtifactName,
    StorageError(String),
    RepositoryError(String),
}

impl std::fmt::Display for CreateProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateProjectError::InvalidName => write!(f, "Project name must not be empty"),
            CreateProjectError::InvalidDescription => {
                write!(f, "Project description must not be empty")
            }
            CreateProjectError::InvalidImageUrl => {
                write!(f, "Project image URL must not be empty")
            }
            CreateProjectError::MissingArtifact => write!(f, "Project artifact must not be empty"),
            CreateProjectError::InvalidArtifactName => write!(f, "Invalid artifact file name"),
            CreateProjectError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            CreateProjectError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreateProjectError {}

#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub artifact_name: String,
    pub artifact_bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedProject {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait ICreateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        account_id: Uuid,
        command: CreateProjectCommand,
    ) -> Result<CreatedProject, CreateProjectError>;
}

pub struct CreateProjectUseCase<R, S>
where
    R: ProjectRepository + Send + Sync,
    S: ArtifactStore + Send + Sync,
{
    repository: R,
    artifact_store: S,
}

impl<R, S> CreateProjectUseCase<R, S>
where
    R: ProjectRepository + Send + Sync,
    S: ArtifactStore + Send + Sync,
{
    pub fn new(repository: R, artifact_store: S) -> Self {
        Self {
            repository,
            artifact_store,
        }
    }
}

#[async_trait]
impl<R, S> ICreateProjectUseCase for CreateProjectUseCase<R, S>
where
    R: ProjectRepository + Send + Sync,
    S: ArtifactStore + Send + Sync,
{
    async fn execute(
        &self,
        account_id: Uuid,
        command: CreateProjectCommand,
    ) -> Result<CreatedProject, CreateProjectError> {
        let name = command.name.trim();
        if name.is_empty() {
            return Err(CreateProjectError::InvalidName);
        }

        let description = command.description.trim();
        if description.is_empty() {
            return Err(CreateProjectError::InvalidDescription);
        }

        let image_url = command.image_url.trim();
        if image_url.is_empty() {
            return Err(CreateProjectError::InvalidImageUrl);
        }

        if command.artifact_bytes.is_empty() {
            return Err(CreateProjectError::MissingArtifact);
        }

        // Store the blob first; the row carries the returned reference.
        let artifact_path = self
            .artifact_store
            .save(&command.artifact_name, &command.artifact_bytes)
            .await
            .map_err(|e| match e {
                ArtifactStoreError::InvalidFileName => CreateProjectError::InvalidArtifactName,
                other => CreateProjectError::StorageError(other.to_string()),
            })?;

        let project = self
            .repository
            .create_project(NewProject {
                account_id,
                name: name.to_string(),
                description: description.to_string(),
                image_url: image_url.to_string(),
                artifact_name: command.artifact_name.clone(),
                artifact_path,
            })
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::OwnerNotFound => {
                    CreateProjectError::RepositoryError("Owner account not found".to_string())
                }
                ProjectRepositoryError::DatabaseError(msg) => {
                    CreateProjectError::RepositoryError(msg)
                }
            })?;

        Ok(CreatedProject {
            id: project.id,
            name: project.name,
            created_at: project.created_at,
        })
    }
}
