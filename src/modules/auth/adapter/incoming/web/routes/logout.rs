use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::application::use_cases::logout_account::LogoutRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Log out, revoking the supplied refresh token
///
/// Always succeeds from the caller's point of view, even when the token is
/// already invalid or missing.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(
    req: web::Json<LogoutRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.logout_account_use_case.execute(req.into_inner()).await {
        Ok(response) => ApiResponse::success(response),
        Err(e) => {
            error!(error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}
