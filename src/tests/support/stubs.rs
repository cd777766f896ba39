//! Placeholder collaborators for handler tests. Each stub panics when
//! called, so a test that forgets to plug in the mock it actually needs
//! fails loudly instead of passing by accident.

use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};
use crate::modules::auth::application::use_cases::{
    delete_account::{DeleteAccountError, IDeleteAccountUseCase},
    fetch_profile::{FetchProfileError, IFetchProfileUseCase, ProfileView},
    login_account::{ILoginAccountUseCase, LoginAccountResponse, LoginError},
    logout_account::{ILogoutAccountUseCase, LogoutError, LogoutRequest, LogoutResponse},
    refresh_session::{IRefreshSessionUseCase, RefreshError, RefreshRequest, RefreshResponse},
    register_account::{IRegisterAccountUseCase, RegisterError, RegisteredAccount},
};
use crate::modules::comment::application::domain::entities::CommentView;
use crate::modules::comment::application::use_cases::{
    edit_comment::{EditCommentError, EditedComment, IEditCommentUseCase},
    get_comments::{GetCommentsError, IGetCommentsUseCase},
    post_comment::{IPostCommentUseCase, PostCommentError, PostedComment},
};
use crate::modules::like::application::use_cases::toggle_like::{
    IToggleLikeUseCase, ToggleLikeError, ToggleLikeResponse,
};
use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::use_cases::{
    create_project::{CreateProjectCommand, CreateProjectError, CreatedProject, ICreateProjectUseCase},
    download_artifact::{ArtifactDownload, DownloadArtifactError, IDownloadArtifactUseCase},
    list_projects::{
        IGetFeedUseCase, IGetLikedProjectsUseCase, IGetOwnedProjectsUseCase, ListProjectsError,
    },
};

/// A token provider that accepts any bearer token as a valid access token
/// for the given account. Register it as app data next to the state under
/// test so the auth extractors resolve.
pub fn token_provider_data(account_id: Uuid) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(AcceptAllTokenProvider { account_id });
    web::Data::new(provider)
}

struct AcceptAllTokenProvider {
    account_id: Uuid,
}

impl TokenProvider for AcceptAllTokenProvider {
    fn generate_access_token(&self, _account_id: Uuid) -> Result<String, TokenError> {
        Ok("stub-access-token".to_string())
    }

    fn generate_refresh_token(&self, _account_id: Uuid) -> Result<String, TokenError> {
        Ok("stub-refresh-token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let now = chrono::Utc::now().timestamp();
        Ok(TokenClaims {
            sub: self.account_id,
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
        })
    }
}

pub struct UnusedRegisterAccount;

#[async_trait]
impl IRegisterAccountUseCase for UnusedRegisterAccount {
    async fn execute(
        &self,
        _username: String,
        _password: String,
        _contact: Option<String>,
    ) -> Result<RegisteredAccount, RegisterError> {
        unimplemented!("register_account stub called; plug in a mock")
    }
}

pub struct UnusedLoginAccount;

#[async_trait]
impl ILoginAccountUseCase for UnusedLoginAccount {
    async fn execute(
        &self,
        _username: String,
        _password: String,
    ) -> Result<LoginAccountResponse, LoginError> {
        unimplemented!("login_account stub called; plug in a mock")
    }
}

pub struct UnusedLogoutAccount;

#[async_trait]
impl ILogoutAccountUseCase for UnusedLogoutAccount {
    async fn execute(&self, _request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        unimplemented!("logout_account stub called; plug in a mock")
    }
}

pub struct UnusedRefreshSession;

#[async_trait]
impl IRefreshSessionUseCase for UnusedRefreshSession {
    async fn execute(&self, _request: RefreshRequest) -> Result<RefreshResponse, RefreshError> {
        unimplemented!("refresh_session stub called; plug in a mock")
    }
}

pub struct UnusedDeleteAccount;

#[async_trait]
impl IDeleteAccountUseCase for UnusedDeleteAccount {
    async fn execute(&self, _account_id: Uuid) -> Result<(), DeleteAccountError> {
        unimplemented!("delete_account stub called; plug in a mock")
    }
}

pub struct UnusedFetchProfile;

#[async_trait]
impl IFetchProfileUseCase for UnusedFetchProfile {
    async fn execute(&self, _account_id: Uuid) -> Result<ProfileView, FetchProfileError> {
        unimplemented!("fetch_profile stub called; plug in a mock")
    }
}

pub struct UnusedCreateProject;

#[async_trait]
impl ICreateProjectUseCase for UnusedCreateProject {
    async fn execute(
        &self,
        _account_id: Uuid,
        _command: CreateProjectCommand,
    ) -> Result<CreatedProject, CreateProjectError> {
        unimplemented!("create_project stub called; plug in a mock")
    }
}

pub struct UnusedGetFeed;

#[async_trait]
impl IGetFeedUseCase for UnusedGetFeed {
    async fn execute(&self, _viewer: Option<Uuid>) -> Result<Vec<ProjectView>, ListProjectsError> {
        unimplemented!("get_feed stub called; plug in a mock")
    }
}

pub struct UnusedGetOwnedProjects;

#[async_trait]
impl IGetOwnedProjectsUseCase for UnusedGetOwnedProjects {
    async fn execute(&self, _account_id: Uuid) -> Result<Vec<ProjectView>, ListProjectsError> {
        unimplemented!("get_owned_projects stub called; plug in a mock")
    }
}

pub struct UnusedGetLikedProjects;

#[async_trait]
impl IGetLikedProjectsUseCase for UnusedGetLikedProjects {
    async fn execute(&self, _account_id: Uuid) -> Result<Vec<ProjectView>, ListProjectsError> {
        unimplemented!("get_liked_projects stub called; plug in a mock")
    }
}

pub struct UnusedDownloadArtifact;

#[async_trait]
impl IDownloadArtifactUseCase for UnusedDownloadArtifact {
    async fn execute(&self, _project_id: Uuid) -> Result<ArtifactDownload, DownloadArtifactError> {
        unimplemented!("download_artifact stub called; plug in a mock")
    }
}

pub struct UnusedToggleLike;

#[async_trait]
impl IToggleLikeUseCase for UnusedToggleLike {
    async fn execute(
        &self,
        _account_id: Uuid,
        _project_id: Uuid,
    ) -> Result<ToggleLikeResponse, ToggleLikeError> {
        unimplemented!("toggle_like stub called; plug in a mock")
    }
}

pub struct UnusedPostComment;

#[async_trait]
impl IPostCommentUseCase for UnusedPostComment {
    async fn execute(
        &self,
        _account_id: Uuid,
        _body: String,
    ) -> Result<PostedComment, PostCommentError> {
        unimplemented!("post_comment stub called; plug in a mock")
    }
}

pub struct UnusedEditComment;

#[async_trait]
impl IEditCommentUseCase for UnusedEditComment {
    async fn execute(
        &self,
        _comment_id: Uuid,
        _account_id: Uuid,
        _body: String,
    ) -> Result<EditedComment, EditCommentError> {
        unimplemented!("edit_comment stub called; plug in a mock")
    }
}

pub struct UnusedGetComments;

#[async_trait]
impl IGetCommentsUseCase for UnusedGetComments {
    async fn execute(&self) -> Result<Vec<CommentView>, GetCommentsError> {
        unimplemented!("get_comments stub called; plug in a mock")
    }
}
