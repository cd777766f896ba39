use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{
    NewProject, ProjectRepository, ProjectRepositoryError,
};

use super::sea_orm_entity::projects::{ActiveModel as ProjectActiveModel, Model as ProjectModel};

#[derive(Clone, Debug)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_project(model: ProjectModel) -> Project {
        Project {
            id: model.id,
            account_id: model.account_id,
            name: model.name,
            description: model.description,
            image_url: model.image_url,
            artifact_name: model.artifact_name,
            artifact_path: model.artifact_path,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(&self, project: NewProject) -> Result<Project, ProjectRepositoryError> {
        let active_project = ProjectActiveModel {
            id: Set(Uuid::new_v4()),
            account_id: Set(project.account_id),
            name: Set(project.name),
            description: Set(project.description),
            image_url: Set(project.image_url),
            artifact_name: Set(project.artifact_name),
            artifact_path: Set(project.artifact_path),
            created_at: Set(chrono::Utc::now().into()),
        };

        let inserted = active_project.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            // Account row deleted between auth check and insert
            if err_str.contains("23503") || err_str.contains("foreign key") {
                return ProjectRepositoryError::OwnerNotFound;
            }
            ProjectRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(Self::map_to_project(inserted))
    }
}
