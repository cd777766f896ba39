use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::comment::application::use_cases::edit_comment::EditCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EditCommentRequest {
    #[schema(example = "Fixed a typo in my earlier comment")]
    pub body: String,
}

fn map_edit_error(err: EditCommentError, comment_id: Uuid, account_id: Uuid) -> HttpResponse {
    match &err {
        EditCommentError::EmptyBody => {
            ApiResponse::bad_request("EMPTY_BODY", "Comment body must not be empty")
        }
        EditCommentError::BodyTooLong => {
            ApiResponse::bad_request("BODY_TOO_LONG", "Comment body is too long")
        }
        EditCommentError::CommentNotFound => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        EditCommentError::NotAuthor => {
            warn!(
                comment_id = %comment_id,
                account_id = %account_id,
                "Edit attempt on someone else's comment"
            );
            ApiResponse::forbidden("NOT_COMMENT_AUTHOR", "Only the author can edit a comment")
        }
        other => {
            error!(comment_id = %comment_id, error = %other, "Comment edit failed");
            ApiResponse::internal_error()
        }
    }
}

/// Edit one of your own comments
#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    tag = "comments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Comment id")),
    request_body = EditCommentRequest,
    responses(
        (status = 200, description = "Comment updated"),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/comments/{id}")]
pub async fn edit_comment_handler(
    account: AuthenticatedAccount,
    path: web::Path<Uuid>,
    req: web::Json<EditCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let comment_id = path.into_inner();

    match data
        .edit_comment_use_case
        .execute(comment_id, account.account_id, req.into_inner().body)
        .await
    {
        Ok(edited) => {
            info!(comment_id = %comment_id, account_id = %account.account_id, "Comment edited");
            ApiResponse::success(edited)
        }
        Err(e) => map_edit_error(e, comment_id, account.account_id),
    }
}
