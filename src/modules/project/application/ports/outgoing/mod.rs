pub mod artifact_store;
pub mod project_query;
pub mod project_repository;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use project_query::{ArtifactRecord, ProjectQuery, ProjectQueryError};
pub use project_repository::{NewProject, ProjectRepository, ProjectRepositoryError};
