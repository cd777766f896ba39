use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};

// Auth
use crate::modules::auth::adapter::incoming::web::routes::login::{
    LoginAccount, LoginRequest, LoginResponse,
};
use crate::modules::auth::adapter::incoming::web::routes::profile::ProfileResponse;
use crate::modules::auth::adapter::incoming::web::routes::register::{
    RegisterRequest, RegisterResponse,
};
use crate::modules::auth::application::use_cases::fetch_profile::ProfileView;
use crate::modules::auth::application::use_cases::logout_account::LogoutRequest;
use crate::modules::auth::application::use_cases::refresh_session::RefreshRequest;

// Projects
use crate::modules::project::adapter::incoming::web::routes::create_project::CreateProjectRequest;
use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::use_cases::create_project::CreatedProject;

// Likes
use crate::modules::like::application::use_cases::toggle_like::ToggleLikeResponse;

// Comments
use crate::modules::comment::adapter::incoming::web::routes::edit_comment::EditCommentRequest;
use crate::modules::comment::adapter::incoming::web::routes::post_comment::PostCommentRequest;
use crate::modules::comment::application::domain::entities::CommentView;
use crate::modules::comment::application::use_cases::edit_comment::EditedComment;
use crate::modules::comment::application::use_cases::post_comment::PostedComment;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Showcase API",
        version = "1.0.0",
        description = "API documentation for the community project showcase"
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::register::register_handler,
        crate::modules::auth::adapter::incoming::web::routes::login::login_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout::logout_handler,
        crate::modules::auth::adapter::incoming::web::routes::refresh::refresh_handler,
        crate::modules::auth::adapter::incoming::web::routes::profile::profile_handler,
        crate::modules::auth::adapter::incoming::web::routes::delete_account::delete_account_handler,

        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::create_project::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::get_feed::get_feed_handler,
        crate::modules::project::adapter::incoming::web::routes::download_artifact::download_artifact_handler,

        // Like endpoints
        crate::modules::like::adapter::incoming::web::routes::toggle_like::toggle_like_handler,

        // Comment endpoints
        crate::modules::comment::adapter::incoming::web::routes::get_comments::get_comments_handler,
        crate::modules::comment::adapter::incoming::web::routes::post_comment::post_comment_handler,
        crate::modules::comment::adapter::incoming::web::routes::edit_comment::edit_comment_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisterResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            LoginAccount,
            LogoutRequest,
            RefreshRequest,
            ProfileResponse,
            ProfileView,

            // Project DTOs
            CreateProjectRequest,
            CreatedProject,
            ProjectView,

            // Like DTOs
            ToggleLikeResponse,

            // Comment DTOs
            PostCommentRequest,
            PostedComment,
            EditCommentRequest,
            EditedComment,
            CommentView,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Account and session endpoints"),
        (name = "projects", description = "Project upload, feed and artifact endpoints"),
        (name = "likes", description = "Like toggle endpoint"),
        (name = "comments", description = "Global comment stream endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT access token"))
                        .build(),
                ),
            )
        }
    }
}

#[get("/api/openapi.json")]
pub async fn openapi_spec() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
