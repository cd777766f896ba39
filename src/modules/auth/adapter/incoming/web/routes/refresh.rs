use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::application::use_cases::refresh_session::{
    RefreshError, RefreshRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_refresh_error(err: RefreshError) -> HttpResponse {
    match &err {
        RefreshError::TokenExpired
        | RefreshError::TokenInvalid
        | RefreshError::TokenNotYetValid
        | RefreshError::InvalidTokenType
        | RefreshError::InvalidSignature
        | RefreshError::TokenRevoked
        | RefreshError::AccountGone => {
            warn!(error = %err, "Refresh rejected");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired refresh token")
        }
        other => {
            error!(error = %other, "Refresh failed");
            ApiResponse::internal_error()
        }
    }
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    responses(
        (status = 200, description = "New access token issued"),
        (status = 401, description = "Invalid or expired refresh token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_handler(
    req: web::Json<RefreshRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.refresh_session_use_case.execute(req.into_inner()).await {
        Ok(response) => ApiResponse::success(response),
        Err(e) => map_refresh_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::use_cases::refresh_session::{
        IRefreshSessionUseCase, RefreshResponse,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    #[derive(Clone)]
    struct MockRefreshSuccess;

    #[async_trait]
    impl IRefreshSessionUseCase for MockRefreshSuccess {
        async fn execute(
            &self,
            _request: RefreshRequest,
        ) -> Result<RefreshResponse, RefreshError> {
            Ok(RefreshResponse {
                access_token: "new-access-token".to_string(),
            })
        }
    }

    #[derive(Clone)]
    struct MockRefreshFails(RefreshError);

    #[async_trait]
    impl IRefreshSessionUseCase for MockRefreshFails {
        async fn execute(
            &self,
            _request: RefreshRequest,
        ) -> Result<RefreshResponse, RefreshError> {
            Err(self.0.clone())
        }
    }

    #[actix_web::test]
    async fn test_refresh_success() {
        let app_state = TestAppStateBuilder::default()
            .with_refresh_session(Arc::new(MockRefreshSuccess))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(refresh_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": "some-refresh-token" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["access_token"], "new-access-token");
    }

    #[actix_web::test]
    async fn test_refresh_revoked_token() {
        let app_state = TestAppStateBuilder::default()
            .with_refresh_session(Arc::new(MockRefreshFails(RefreshError::TokenRevoked)))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(refresh_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": "revoked-token" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn test_refresh_empty_token_is_rejected_at_parse() {
        let app_state = TestAppStateBuilder::default()
            .with_refresh_session(Arc::new(MockRefreshSuccess))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(refresh_handler)).await;

        // Validated during deserialization, never reaches the use case
        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": "   " }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn test_refresh_query_error_is_internal() {
        let app_state = TestAppStateBuilder::default()
            .with_refresh_session(Arc::new(MockRefreshFails(RefreshError::QueryError(
                "db down".to_string(),
            ))))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(refresh_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(serde_json::json!({ "refresh_token": "some-token" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }
}
