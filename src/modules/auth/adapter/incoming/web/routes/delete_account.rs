use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::auth::application::use_cases::delete_account::DeleteAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_delete_error(err: DeleteAccountError) -> HttpResponse {
    match &err {
        DeleteAccountError::AccountNotFound => {
            warn!("Delete requested for missing account");
            ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found")
        }
        other => {
            error!(error = %other, "Account deletion failed");
            ApiResponse::internal_error()
        }
    }
}

/// Delete the authenticated account and everything it owns
///
/// Removes the account's likes, comments and projects together with the
/// account row in a single transaction.
#[utoipa::path(
    delete,
    path = "/api/auth/account",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/auth/account")]
pub async fn delete_account_handler(
    account: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .delete_account_use_case
        .execute(account.account_id)
        .await
    {
        Ok(()) => {
            info!(account_id = %account.account_id, "Account deleted");
            ApiResponse::no_content()
        }
        Err(e) => map_delete_error(e),
    }
}
