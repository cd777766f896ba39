use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::project::application::use_cases::download_artifact::DownloadArtifactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_download_error(err: DownloadArtifactError, project_id: Uuid) -> HttpResponse {
    match &err {
        DownloadArtifactError::ProjectNotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        DownloadArtifactError::ArtifactMissing => {
            warn!(project_id = %project_id, "Artifact row exists but file is gone");
            ApiResponse::not_found("ARTIFACT_MISSING", "Artifact file is missing")
        }
        other => {
            error!(project_id = %project_id, error = %other, "Artifact download failed");
            ApiResponse::internal_error()
        }
    }
}

/// Download a project's artifact
///
/// Streams the uploaded file back under its original name. Requires a
/// logged-in caller; any account may download any artifact.
#[utoipa::path(
    get,
    path = "/api/projects/{id}/artifact",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Artifact bytes", content_type = "application/octet-stream"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Project or artifact not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/projects/{id}/artifact")]
pub async fn download_artifact_handler(
    _account: AuthenticatedAccount,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.download_artifact_use_case.execute(project_id).await {
        Ok(download) => {
            info!(project_id = %project_id, file = %download.file_name, "Artifact served");
            HttpResponse::Ok()
                .content_type("application/octet-stream")
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", download.file_name),
                ))
                .body(download.bytes)
        }
        Err(e) => map_download_error(e, project_id),
    }
}
