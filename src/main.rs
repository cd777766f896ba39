pub mod modules;
pub use modules::auth;
pub use modules::comment;
pub use modules::like;
pub use modules::project;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::account_query_postgres::AccountQueryPostgres;
use crate::auth::adapter::outgoing::account_repository_postgres::AccountRepositoryPostgres;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::token_repository_redis::RedisTokenRepository;
use crate::auth::application::use_cases::{
    delete_account::{DeleteAccountUseCase, IDeleteAccountUseCase},
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    login_account::{ILoginAccountUseCase, LoginAccountUseCase},
    logout_account::{ILogoutAccountUseCase, LogoutAccountUseCase},
    refresh_session::{IRefreshSessionUseCase, RefreshSessionUseCase},
    register_account::{IRegisterAccountUseCase, RegisterAccountUseCase},
};

use crate::project::adapter::outgoing::fs_artifact_store::FsArtifactStore;
use crate::project::adapter::outgoing::project_query_postgres::ProjectQueryPostgres;
use crate::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::project::application::use_cases::{
    create_project::{CreateProjectUseCase, ICreateProjectUseCase},
    download_artifact::{DownloadArtifactUseCase, IDownloadArtifactUseCase},
    list_projects::{
        GetFeedUseCase, GetLikedProjectsUseCase, GetOwnedProjectsUseCase, IGetFeedUseCase,
        IGetLikedProjectsUseCase, IGetOwnedProjectsUseCase,
    },
};

use crate::like::adapter::outgoing::like_repository_postgres::LikeRepositoryPostgres;
use crate::like::application::use_cases::toggle_like::{IToggleLikeUseCase, ToggleLikeUseCase};

use crate::comment::adapter::outgoing::comment_query_postgres::CommentQueryPostgres;
use crate::comment::adapter::outgoing::comment_repository_postgres::CommentRepositoryPostgres;
use crate::comment::application::use_cases::{
    edit_comment::{EditCommentUseCase, IEditCommentUseCase},
    get_comments::{GetCommentsUseCase, IGetCommentsUseCase},
    post_comment::{IPostCommentUseCase, PostCommentUseCase},
};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_account_use_case: Arc<dyn IRegisterAccountUseCase + Send + Sync>,
    pub login_account_use_case: Arc<dyn ILoginAccountUseCase + Send + Sync>,
    pub logout_account_use_case: Arc<dyn ILogoutAccountUseCase + Send + Sync>,
    pub refresh_session_use_case: Arc<dyn IRefreshSessionUseCase + Send + Sync>,
    pub delete_account_use_case: Arc<dyn IDeleteAccountUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub create_project_use_case: Arc<dyn ICreateProjectUseCase + Send + Sync>,
    pub get_feed_use_case: Arc<dyn IGetFeedUseCase + Send + Sync>,
    pub get_owned_projects_use_case: Arc<dyn IGetOwnedProjectsUseCase + Send + Sync>,
    pub get_liked_projects_use_case: Arc<dyn IGetLikedProjectsUseCase + Send + Sync>,
    pub download_artifact_use_case: Arc<dyn IDownloadArtifactUseCase + Send + Sync>,
    pub toggle_like_use_case: Arc<dyn IToggleLikeUseCase + Send + Sync>,
    pub post_comment_use_case: Arc<dyn IPostCommentUseCase + Send + Sync>,
    pub edit_comment_use_case: Arc<dyn IEditCommentUseCase + Send + Sync>,
    pub get_comments_use_case: Arc<dyn IGetCommentsUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Auth wiring
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let argon2_password_hasher = Argon2Hasher::from_env();

    let account_repo = AccountRepositoryPostgres::new(Arc::clone(&db_arc));
    let account_query = AccountQueryPostgres::new(Arc::clone(&db_arc));
    let redis_token_repo = RedisTokenRepository::new(Arc::clone(&redis_arc));

    let register_account_use_case =
        RegisterAccountUseCase::new(account_repo.clone(), argon2_password_hasher.clone());
    let login_account_use_case = LoginAccountUseCase::new(
        account_query.clone(),
        argon2_password_hasher,
        jwt_service.clone(),
    );
    let logout_account_use_case =
        LogoutAccountUseCase::new(redis_token_repo.clone(), Arc::new(jwt_service.clone()));
    let refresh_session_use_case = RefreshSessionUseCase::new(
        account_query.clone(),
        redis_token_repo,
        Arc::new(jwt_service.clone()),
    );
    let delete_account_use_case = DeleteAccountUseCase::new(account_repo);
    let fetch_profile_use_case = FetchProfileUseCase::new(account_query);

    // Project wiring
    let artifact_store = FsArtifactStore::from_env();
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));

    let create_project_use_case = CreateProjectUseCase::new(project_repo, artifact_store.clone());
    let get_feed_use_case = GetFeedUseCase::new(project_query.clone());
    let get_owned_projects_use_case = GetOwnedProjectsUseCase::new(project_query.clone());
    let get_liked_projects_use_case = GetLikedProjectsUseCase::new(project_query.clone());
    let download_artifact_use_case = DownloadArtifactUseCase::new(project_query, artifact_store);

    // Like wiring
    let like_repo = LikeRepositoryPostgres::new(Arc::clone(&db_arc));
    let toggle_like_use_case = ToggleLikeUseCase::new(like_repo);

    // Comment wiring
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db_arc));
    let comment_query = CommentQueryPostgres::new(Arc::clone(&db_arc));

    let post_comment_use_case = PostCommentUseCase::new(comment_repo.clone());
    let edit_comment_use_case = EditCommentUseCase::new(comment_repo);
    let get_comments_use_case = GetCommentsUseCase::new(comment_query);

    let state = AppState {
        register_account_use_case: Arc::new(register_account_use_case),
        login_account_use_case: Arc::new(login_account_use_case),
        logout_account_use_case: Arc::new(logout_account_use_case),
        refresh_session_use_case: Arc::new(refresh_session_use_case),
        delete_account_use_case: Arc::new(delete_account_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        create_project_use_case: Arc::new(create_project_use_case),
        get_feed_use_case: Arc::new(get_feed_use_case),
        get_owned_projects_use_case: Arc::new(get_owned_projects_use_case),
        get_liked_projects_use_case: Arc::new(get_liked_projects_use_case),
        download_artifact_use_case: Arc::new(download_artifact_use_case),
        toggle_like_use_case: Arc::new(toggle_like_use_case),
        post_comment_use_case: Arc::new(post_comment_use_case),
        edit_comment_use_case: Arc::new(edit_comment_use_case),
        get_comments_use_case: Arc::new(get_comments_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(crate::shared::api::json_config::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // OpenAPI
    cfg.service(crate::api::openapi::openapi_spec);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_account_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_feed_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::download_artifact_handler);
    // Likes
    cfg.service(crate::like::adapter::incoming::web::routes::toggle_like_handler);
    // Comments
    cfg.service(crate::comment::adapter::incoming::web::routes::get_comments_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::post_comment_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::edit_comment_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
