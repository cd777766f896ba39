use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::{
    ArtifactStore, ArtifactStoreError, ProjectQuery,
};

#[derive(Debug, Clone)]
pub enum DownloadArtifactError {
    ProjectNotFound,
    ArtifactMissing,
    StorageError(String),
    QueryError(String),
}

impl std::fmt::Display for DownloadArtifactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadArtifactError::ProjectNotFound => write!(f, "Project not found"),
            DownloadArtifactError::ArtifactMissing => write!(f, "Artifact file is missing"),
            DownloadArtifactError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            DownloadArtifactError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for DownloadArtifactError {}

/// The artifact bytes together with the name the file was uploaded under.
#[derive(Debug, Clone)]
pub struct ArtifactDownload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait IDownloadArtifactUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid)
        -> Result<ArtifactDownload, DownloadArtifactError>;
}

pub struct DownloadArtifactUseCase<Q, S>
where
    Q: ProjectQuery + Send + Sync,
    S: ArtifactStore + Send + Sync,
{
    query: Q,
    artifact_store: S,
}

impl<Q, S> DownloadArtifactUseCase<Q, S>
where
    Q: ProjectQuery + Send + Sync,
    S: ArtifactStore + Send + Sync,
{
    pub fn new(query: Q, artifact_store: S) -> Self {
        Self {
            query,
            artifact_store,
        }
    }
}

#[async_trait]
impl<Q, S> IDownloadArtifactUseCase for DownloadArtifactUseCase<Q, S>
where
    Q: ProjectQuery + Send + Sync,
    S: ArtifactStore + Send + Sync,
{
    async fn execute(
        &self,
        project_id: Uuid,
    ) -> Result<ArtifactDownload, DownloadArtifactError> {
        let record = self
            .query
            .find_artifact(project_id)
            .await
            .map_err(|e| DownloadArtifactError::QueryError(e.to_string()))?
            .ok_or(DownloadArtifactError::ProjectNotFound)?;

        let bytes = self
            .artifact_store
            .load(&record.path)
            .await
            .map_err(|e| match e {
                // Row exists but the file is gone from disk
                ArtifactStoreError::NotFound => DownloadArtifactError::ArtifactMissing,
                other => DownloadArtifactError::StorageError(other.to_string()),
            })?;

        Ok(ArtifactDownload {
            file_name: record.file_name,
            bytes,
        })
    }
}
