use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The global comment stream, newest first
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = "comments",
    responses(
        (status = 200, description = "Comment list"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/comments")]
pub async fn get_comments_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_comments_use_case.execute().await {
        Ok(comments) => ApiResponse::success(comments),
        Err(e) => {
            error!(error = %e, "Failed to load comments");
            ApiResponse::internal_error()
        }
    }
}
