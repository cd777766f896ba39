use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::login_account::LoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "maker42")]
    pub username: String,

    #[schema(example = "hunter2000")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Short-lived bearer token for API calls
    pub access_token: String,

    /// Long-lived token for POST /api/auth/refresh
    pub refresh_token: String,

    pub account: LoginAccount,
}

#[derive(Serialize, ToSchema)]
pub struct LoginAccount {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "maker42")]
    pub username: String,
}

fn map_login_error(err: LoginError, username: &str) -> HttpResponse {
    match &err {
        // Unknown username and wrong password give the same response
        LoginError::InvalidCredentials => {
            warn!(username = %username, "Failed login attempt");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        other => {
            error!(username = %username, error = %other, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = inline(SuccessResponse<LoginResponse>)),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .login_account_use_case
        .execute(req.username.clone(), req.password.clone())
        .await;

    match result {
        Ok(response) => {
            info!(account_id = %response.account.id, "Login successful");
            ApiResponse::success(LoginResponse {
                access_token: response.access_token,
                refresh_token: response.refresh_token,
                account: LoginAccount {
                    id: response.account.id.to_string(),
                    username: response.account.username,
                },
            })
        }
        Err(e) => map_login_error(e, &req.username),
    }
}
