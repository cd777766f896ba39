use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::{ArtifactStore, ArtifactStoreError};

/// Stores artifacts as flat files under one directory. The reference handed
/// back by `save` is the generated file name, never a path with separators,
/// so `load` can reject anything that tries to escape the root.
#[derive(Clone, Debug)]
pub struct FsArtifactStore {
    root: PathBuf,
}

impl FsArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_env() -> Self {
        let root = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());
        Self::new(root)
    }

    fn sanitize_file_name(file_name: &str) -> Result<String, ArtifactStoreError> {
        let cleaned: String = file_name
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if cleaned.is_empty() || cleaned.chars().all(|c| c == '.' || c == '_') {
            return Err(ArtifactStoreError::InvalidFileName);
        }

        Ok(cleaned)
    }

    #[cfg(test)]
    fn root_path(&self) -> &PathBuf {
        &self.root
    }

    fn resolve(&self, reference: &str) -> Result<PathBuf, ArtifactStoreError> {
        // References are flat file names; separators mean someone is probing.
        if reference.is_empty()
            || reference.contains('/')
            || reference.contains('\\')
            || reference.contains("..")
        {
            warn!(reference = %reference, "Rejected artifact reference");
            return Err(ArtifactStoreError::InvalidFileName);
        }
        Ok(self.root.join(reference))
    }
}

#[async_trait]
impl ArtifactStore for FsArtifactStore {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<String, ArtifactStoreError> {
        let cleaned = Self::sanitize_file_name(file_name)?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| ArtifactStoreError::IoError(e.to_string()))?;

        let reference = format!("{}_{}", Uuid::new_v4().simple(), cleaned);
        let path = self.root.join(&reference);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| ArtifactStoreError::IoError(e.to_string()))?;

        debug!(reference = %reference, size = bytes.len(), "Stored artifact");
        Ok(reference)
    }

    async fn load(&self, reference: &str) -> Result<Vec<u8>, ArtifactStoreError> {
        let path = self.resolve(reference)?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ArtifactStoreError::NotFound)
            }
            Err(e) => Err(ArtifactStoreError::IoError(e.to_string())),
        }
    }
}
