use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A project row as stored, including the artifact location on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub artifact_name: String,
    pub artifact_path: String,
    pub created_at: DateTime<Utc>,
}

/// A project as shown to a viewer. `liked` is relative to the viewer and
/// false for anonymous requests.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectView {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub owner_username: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub like_count: i64,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
}
