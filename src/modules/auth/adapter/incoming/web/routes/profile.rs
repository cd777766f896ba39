use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::auth::application::use_cases::fetch_profile::{
    FetchProfileError, ProfileView,
};
use crate::modules::project::application::domain::entities::ProjectView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ProfileResponse {
    pub account: ProfileView,

    /// Projects the account uploaded, ranked like the feed
    pub projects: Vec<ProjectView>,

    /// Projects the account has liked
    pub liked_projects: Vec<ProjectView>,
}

/// Fetch the authenticated account's profile
///
/// Returns the account details together with its own projects and the
/// projects it has liked.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile data"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profile")]
pub async fn profile_handler(
    account: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile = match data.fetch_profile_use_case.execute(account.account_id).await {
        Ok(p) => p,
        Err(FetchProfileError::AccountNotFound) => {
            return ApiResponse::not_found("ACCOUNT_NOT_FOUND", "Account not found");
        }
        Err(e) => {
            error!(error = %e, "Failed to load profile");
            return ApiResponse::internal_error();
        }
    };

    let projects = match data
        .get_owned_projects_use_case
        .execute(account.account_id)
        .await
    {
        Ok(list) => list,
        Err(e) => {
            error!(error = %e, "Failed to load owned projects");
            return ApiResponse::internal_error();
        }
    };

    let liked_projects = match data
        .get_liked_projects_use_case
        .execute(account.account_id)
        .await
    {
        Ok(list) => list,
        Err(e) => {
            error!(error = %e, "Failed to load liked projects");
            return ApiResponse::internal_error();
        }
    };

    ApiResponse::success(ProfileResponse {
        account: profile,
        projects,
        liked_projects,
    })
}
