use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::like::application::use_cases::toggle_like::ToggleLikeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_toggle_error(err: ToggleLikeError) -> HttpResponse {
    match &err {
        ToggleLikeError::ProjectNotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        other => {
            error!(error = %other, "Like toggle failed");
            ApiResponse::internal_error()
        }
    }
}

/// Toggle a like on a project
///
/// Liking twice removes the like. The response reports the resulting
/// state and the project's total like count.
#[utoipa::path(
    post,
    path = "/api/projects/{id}/like",
    tag = "likes",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "New like state"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/projects/{id}/like")]
pub async fn toggle_like_handler(
    account: AuthenticatedAccount,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .toggle_like_use_case
        .execute(account.account_id, project_id)
        .await
    {
        Ok(response) => {
            info!(
                account_id = %account.account_id,
                project_id = %project_id,
                liked = response.liked,
                "Like toggled"
            );
            ApiResponse::success(response)
        }
        Err(e) => map_toggle_error(e),
    }
}
