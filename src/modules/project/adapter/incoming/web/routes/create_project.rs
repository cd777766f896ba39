use actix_web::{post, web, HttpResponse, Responder};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::project::application::use_cases::create_project::{
    CreateProjectCommand, CreateProjectError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    #[schema(example = "Weather Station")]
    pub name: String,

    #[schema(example = "ESP32 weather logger with a solar panel")]
    pub description: String,

    /// Screenshot or cover image shown in the feed
    #[serde(default)]
    pub image_url: String,

    /// Name the artifact was uploaded under, kept for the download
    #[schema(example = "firmware.zip")]
    pub artifact_name: String,

    /// Artifact payload, base64-encoded
    pub artifact_base64: String,
}

fn map_create_error(err: CreateProjectError) -> HttpResponse {
    match &err {
        CreateProjectError::InvalidName => {
            ApiResponse::bad_request("INVALID_NAME", "Project name must not be empty")
        }
        CreateProjectError::InvalidDescription => ApiResponse::bad_request(
            "INVALID_DESCRIPTION",
            "Project description must not be empty",
        ),
        CreateProjectError::InvalidImageUrl => {
            ApiResponse::bad_request("INVALID_IMAGE_URL", "Project image URL must not be empty")
        }
        CreateProjectError::MissingArtifact => {
            ApiResponse::bad_request("MISSING_ARTIFACT", "Project artifact must not be empty")
        }
        CreateProjectError::InvalidArtifactName => {
            ApiResponse::bad_request("INVALID_ARTIFACT_NAME", "Invalid artifact file name")
        }
        other => {
            error!(error = %other, "Project creation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Upload a new project
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    security(("bearer_auth" = [])),
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created"),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    account: AuthenticatedAccount,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let artifact_bytes = match BASE64.decode(req.artifact_base64.as_bytes()) {
        Ok(bytes) => bytes,
        Err(_) => {
            warn!(account_id = %account.account_id, "Artifact payload is not valid base64");
            return ApiResponse::bad_request("INVALID_ARTIFACT", "Artifact must be valid base64");
        }
    };

    let result = data
        .create_project_use_case
        .execute(
            account.account_id,
            CreateProjectCommand {
                name: req.name,
                description: req.description,
                image_url: req.image_url,
                artifact_name: req.artifact_name,
                artifact_bytes,
            },
        )
        .await;

    match result {
        Ok(created) => {
            info!(project_id = %created.id, account_id = %account.account_id, "Project created");
            ApiResponse::created(created)
        }
        Err(e) => map_create_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::use_cases::create_project::{
        CreatedProject, ICreateProjectUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::token_provider_data;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Arc;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockCreateSuccess;

    #[async_trait]
    impl ICreateProjectUseCase for MockCreateSuccess {
        async fn execute(
            &self,
            _account_id: Uuid,
            command: CreateProjectCommand,
        ) -> Result<CreatedProject, CreateProjectError> {
            assert_eq!(command.artifact_bytes, b"artifact-bytes");
            Ok(CreatedProject {
                id: Uuid::new_v4(),
                name: command.name,
                created_at: Utc::now(),
            })
        }
    }

    #[derive(Clone)]
    struct MockCreateFails(CreateProjectError);

    #[async_trait]
    impl ICreateProjectUseCase for MockCreateFails {
        async fn execute(
            &self,
            _account_id: Uuid,
            _command: CreateProjectCommand,
        ) -> Result<CreatedProject, CreateProjectError> {
            Err(self.0.clone())
        }
    }

    fn request_json() -> serde_json::Value {
        serde_json::json!({
            "name": "Weather Station",
            "description": "ESP32 weather logger",
            "image_url": "https://example.com/ws.png",
            "artifact_name": "firmware.zip",
            "artifact_base64": BASE64.encode(b"artifact-bytes"),
        })
    }

    #[actix_web::test]
    async fn test_create_project_success() {
        let app_state = TestAppStateBuilder::default()
            .with_create_project(Arc::new(MockCreateSuccess))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data(Uuid::new_v4()))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(("Authorization", "Bearer valid-token"))
            .set_json(request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "Weather Station");
    }

    #[actix_web::test]
    async fn test_create_project_requires_auth() {
        let app_state = TestAppStateBuilder::default()
            .with_create_project(Arc::new(MockCreateSuccess))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data(Uuid::new_v4()))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_create_project_rejects_bad_base64() {
        let app_state = TestAppStateBuilder::default()
            .with_create_project(Arc::new(MockCreateSuccess))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data(Uuid::new_v4()))
                .service(create_project_handler),
        )
        .await;

        let mut body = request_json();
        body["artifact_base64"] = serde_json::json!("not base64 !!!");

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(("Authorization", "Bearer valid-token"))
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let resp_body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(resp_body["error"]["code"], "INVALID_ARTIFACT");
    }

    #[actix_web::test]
    async fn test_create_project_blank_name() {
        let app_state = TestAppStateBuilder::default()
            .with_create_project(Arc::new(MockCreateFails(CreateProjectError::InvalidName)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data(Uuid::new_v4()))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(("Authorization", "Bearer valid-token"))
            .set_json(request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_NAME");
    }

    #[actix_web::test]
    async fn test_create_project_blank_image_url() {
        let app_state = TestAppStateBuilder::default()
            .with_create_project(Arc::new(MockCreateFails(CreateProjectError::InvalidImageUrl)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data(Uuid::new_v4()))
                .service(create_project_handler),
        )
        .await;

        let mut body = request_json();
        body["image_url"] = serde_json::json!("");

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(("Authorization", "Bearer valid-token"))
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_IMAGE_URL");
    }

    #[actix_web::test]
    async fn test_create_project_storage_error_is_internal() {
        let app_state = TestAppStateBuilder::default()
            .with_create_project(Arc::new(MockCreateFails(CreateProjectError::StorageError(
                "disk full".to_string(),
            ))))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data(Uuid::new_v4()))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(("Authorization", "Bearer valid-token"))
            .set_json(request_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }
}
