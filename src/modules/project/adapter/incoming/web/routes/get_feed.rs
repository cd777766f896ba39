use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::MaybeAuthenticated;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The public project feed
///
/// Projects ranked by like count, newest first among ties. Anonymous
/// callers get the same list with every `liked` flag false.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Ranked project list"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_feed_handler(
    viewer: MaybeAuthenticated,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_feed_use_case.execute(viewer.account_id).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => {
            error!(error = %e, "Failed to load feed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::entities::ProjectView;
    use crate::modules::project::application::use_cases::list_projects::{
        IGetFeedUseCase, ListProjectsError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::token_provider_data;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Arc;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockFeed;

    #[async_trait]
    impl IGetFeedUseCase for MockFeed {
        async fn execute(
            &self,
            viewer: Option<Uuid>,
        ) -> Result<Vec<ProjectView>, ListProjectsError> {
            Ok(vec![ProjectView {
                id: Uuid::new_v4(),
                owner_id: Uuid::new_v4(),
                owner_username: "maker42".to_string(),
                name: "Weather Station".to_string(),
                description: "desc".to_string(),
                image_url: "https://example.com/ws.png".to_string(),
                like_count: 3,
                liked: viewer.is_some(),
                created_at: Utc::now(),
            }])
        }
    }

    #[derive(Clone)]
    struct MockFeedFails;

    #[async_trait]
    impl IGetFeedUseCase for MockFeedFails {
        async fn execute(
            &self,
            _viewer: Option<Uuid>,
        ) -> Result<Vec<ProjectView>, ListProjectsError> {
            Err(ListProjectsError::QueryError("db down".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_feed_anonymous() {
        let app_state = TestAppStateBuilder::default()
            .with_get_feed(Arc::new(MockFeed))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data(Uuid::new_v4()))
                .service(get_feed_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let list = body["data"].as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["liked"], false);
        assert_eq!(list[0]["like_count"], 3);
    }

    #[actix_web::test]
    async fn test_feed_with_viewer_resolves_liked() {
        let app_state = TestAppStateBuilder::default()
            .with_get_feed(Arc::new(MockFeed))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data(Uuid::new_v4()))
                .service(get_feed_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/projects")
            .insert_header(("Authorization", "Bearer valid-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["liked"], true);
    }

    #[actix_web::test]
    async fn test_feed_query_error_is_internal() {
        let app_state = TestAppStateBuilder::default()
            .with_get_feed(Arc::new(MockFeedFails))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data(Uuid::new_v4()))
                .service(get_feed_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }
}
