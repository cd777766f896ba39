use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::ports::outgoing::{
    ArtifactRecord, ProjectQuery, ProjectQueryError,
};

/// Shared SELECT list for all listings. `$1` is the viewer whose likes
/// resolve the `liked` flag; `uuid_nil()` stands in for anonymous viewers.
const VIEW_COLUMNS: &str = "\
    p.id, p.account_id AS owner_id, a.username AS owner_username, \
    p.name, p.description, p.image_url, p.created_at, \
    (SELECT COUNT(*) FROM likes l WHERE l.project_id = p.id) AS like_count, \
    EXISTS(SELECT 1 FROM likes l WHERE l.project_id = p.id AND l.account_id = $1) AS liked";

const ORDER: &str = "ORDER BY like_count DESC, p.created_at DESC";

#[derive(Debug, FromQueryResult)]
struct ProjectViewRow {
    id: Uuid,
    owner_id: Uuid,
    owner_username: String,
    name: String,
    description: String,
    image_url: String,
    like_count: i64,
    liked: bool,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
}

#[derive(Debug, FromQueryResult)]
struct ArtifactRow {
    artifact_name: String,
    artifact_path: String,
}

#[derive(Clone, Debug)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn run_listing(
        &self,
        sql: String,
        viewer: Uuid,
    ) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let rows = ProjectViewRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            &sql,
            [viewer.into()],
        ))
        .all(&*self.db)
        .await
        .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Self::map_row).collect())
    }

    fn map_row(row: ProjectViewRow) -> ProjectView {
        ProjectView {
            id: row.id,
            owner_id: row.owner_id,
            owner_username: row.owner_username,
            name: row.name,
            description: row.description,
            image_url: row.image_url,
            like_count: row.like_count,
            liked: row.liked,
            created_at: row.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_feed(&self, viewer: Option<Uuid>) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let sql = format!(
            "SELECT {VIEW_COLUMNS} FROM projects p \
             JOIN accounts a ON a.id = p.account_id {ORDER}"
        );
        self.run_listing(sql, viewer.unwrap_or(Uuid::nil())).await
    }

    async fn list_owned(&self, account_id: Uuid) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let sql = format!(
            "SELECT {VIEW_COLUMNS} FROM projects p \
             JOIN accounts a ON a.id = p.account_id \
             WHERE p.account_id = $1 {ORDER}"
        );
        self.run_listing(sql, account_id).await
    }

    async fn list_liked(&self, account_id: Uuid) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let sql = format!(
            "SELECT {VIEW_COLUMNS} FROM projects p \
             JOIN accounts a ON a.id = p.account_id \
             JOIN likes viewer_like ON viewer_like.project_id = p.id \
             AND viewer_like.account_id = $1 {ORDER}"
        );
        self.run_listing(sql, account_id).await
    }

    async fn find_artifact(
        &self,
        project_id: Uuid,
    ) -> Result<Option<ArtifactRecord>, ProjectQueryError> {
        let row = ArtifactRow::find_by_statement(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT artifact_name, artifact_path FROM projects WHERE id = $1",
            [project_id.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        Ok(row.map(|r| ArtifactRecord {
            file_name: r.artifact_name,
            path: r.artifact_path,
        }))
    }
}
