use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ArtifactStoreError {
    #[error("Invalid artifact file name")]
    InvalidFileName,

    #[error("Artifact not found")]
    NotFound,

    #[error("Storage error: {0}")]
    IoError(String),
}

/// Blob storage for uploaded project artifacts. `save` returns the opaque
/// reference that `load` accepts; callers persist it alongside the project.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String, ArtifactStoreError>;

    async fn load(&self, reference: &str) -> Result<Vec<u8>, ArtifactStoreError>;
}
