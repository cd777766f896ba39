use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::comment::application::use_cases::post_comment::PostCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PostCommentRequest {
    #[schema(example = "Love the solar panel mount!")]
    pub body: String,
}

fn map_post_error(err: PostCommentError) -> HttpResponse {
    match &err {
        PostCommentError::EmptyBody => {
            ApiResponse::bad_request("EMPTY_BODY", "Comment body must not be empty")
        }
        PostCommentError::BodyTooLong => {
            ApiResponse::bad_request("BODY_TOO_LONG", "Comment body is too long")
        }
        other => {
            error!(error = %other, "Comment creation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Post a comment to the global stream
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = "comments",
    security(("bearer_auth" = [])),
    request_body = PostCommentRequest,
    responses(
        (status = 201, description = "Comment posted"),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/comments")]
pub async fn post_comment_handler(
    account: AuthenticatedAccount,
    req: web::Json<PostCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .post_comment_use_case
        .execute(account.account_id, req.into_inner().body)
        .await
    {
        Ok(posted) => {
            info!(comment_id = %posted.id, account_id = %account.account_id, "Comment posted");
            ApiResponse::created(posted)
        }
        Err(e) => map_post_error(e),
    }
}
