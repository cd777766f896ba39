use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::register_account::RegisterError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for account registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Username (unique, at least 3 characters)
    #[schema(example = "maker42")]
    pub username: String,

    /// Password (at least 6 characters)
    #[schema(example = "hunter2000")]
    pub password: String,

    /// Optional contact address shown on the profile
    #[schema(example = "maker42@example.com")]
    pub contact: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    /// Account ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Username
    #[schema(example = "maker42")]
    username: String,
}

fn map_register_error(err: RegisterError, username: &str) -> HttpResponse {
    match &err {
        RegisterError::InvalidUsername => {
            warn!(username = %username, "Invalid registration input");
            ApiResponse::bad_request(
                "INVALID_USERNAME",
                "Username must be at least 3 characters long",
            )
        }
        RegisterError::InvalidPassword => {
            warn!(username = %username, "Invalid registration input");
            ApiResponse::bad_request(
                "INVALID_PASSWORD",
                "Password must be at least 6 characters long",
            )
        }
        RegisterError::UsernameTaken => {
            warn!(username = %username, "Username already exists");
            ApiResponse::conflict("USERNAME_TAKEN", "Username already exists")
        }
        other => {
            error!(username = %username, error = %other, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<RegisterResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Username already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_handler(
    req: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(username = %req.username, "Registration attempt");

    let result = data
        .register_account_use_case
        .execute(req.username.clone(), req.password.clone(), req.contact.clone())
        .await;

    match result {
        Ok(account) => {
            info!(account_id = %account.id, username = %account.username, "Account created");
            ApiResponse::created(RegisterResponse {
                id: account.id.to_string(),
                username: account.username,
            })
        }
        Err(e) => map_register_error(e, &req.username),
    }
}
