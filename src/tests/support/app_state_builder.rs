//! Builds an `AppState` for handler tests. Every slot starts as a panicking
//! stub; tests override only the use cases their handler exercises.

use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::use_cases::{
    delete_account::IDeleteAccountUseCase, fetch_profile::IFetchProfileUseCase,
    login_account::ILoginAccountUseCase, logout_account::ILogoutAccountUseCase,
    refresh_session::IRefreshSessionUseCase, register_account::IRegisterAccountUseCase,
};
use crate::modules::comment::application::use_cases::{
    edit_comment::IEditCommentUseCase, get_comments::IGetCommentsUseCase,
    post_comment::IPostCommentUseCase,
};
use crate::modules::like::application::use_cases::toggle_like::IToggleLikeUseCase;
use crate::modules::project::application::use_cases::{
    create_project::ICreateProjectUseCase, download_artifact::IDownloadArtifactUseCase,
    list_projects::{IGetFeedUseCase, IGetLikedProjectsUseCase, IGetOwnedProjectsUseCase},
};

use super::stubs;
use crate::AppState;

pub struct TestAppStateBuilder {
    register_account: Arc<dyn IRegisterAccountUseCase + Send + Sync>,
    login_account: Arc<dyn ILoginAccountUseCase + Send + Sync>,
    logout_account: Arc<dyn ILogoutAccountUseCase + Send + Sync>,
    refresh_session: Arc<dyn IRefreshSessionUseCase + Send + Sync>,
    delete_account: Arc<dyn IDeleteAccountUseCase + Send + Sync>,
    fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    create_project: Arc<dyn ICreateProjectUseCase + Send + Sync>,
    get_feed: Arc<dyn IGetFeedUseCase + Send + Sync>,
    get_owned_projects: Arc<dyn IGetOwnedProjectsUseCase + Send + Sync>,
    get_liked_projects: Arc<dyn IGetLikedProjectsUseCase + Send + Sync>,
    download_artifact: Arc<dyn IDownloadArtifactUseCase + Send + Sync>,
    toggle_like: Arc<dyn IToggleLikeUseCase + Send + Sync>,
    post_comment: Arc<dyn IPostCommentUseCase + Send + Sync>,
    edit_comment: Arc<dyn IEditCommentUseCase + Send + Sync>,
    get_comments: Arc<dyn IGetCommentsUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_account: Arc::new(stubs::UnusedRegisterAccount),
            login_account: Arc::new(stubs::UnusedLoginAccount),
            logout_account: Arc::new(stubs::UnusedLogoutAccount),
            refresh_session: Arc::new(stubs::UnusedRefreshSession),
            delete_account: Arc::new(stubs::UnusedDeleteAccount),
            fetch_profile: Arc::new(stubs::UnusedFetchProfile),
            create_project: Arc::new(stubs::UnusedCreateProject),
            get_feed: Arc::new(stubs::UnusedGetFeed),
            get_owned_projects: Arc::new(stubs::UnusedGetOwnedProjects),
            get_liked_projects: Arc::new(stubs::UnusedGetLikedProjects),
            download_artifact: Arc::new(stubs::UnusedDownloadArtifact),
            toggle_like: Arc::new(stubs::UnusedToggleLike),
            post_comment: Arc::new(stubs::UnusedPostComment),
            edit_comment: Arc::new(stubs::UnusedEditComment),
            get_comments: Arc::new(stubs::UnusedGetComments),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_account(
        mut self,
        use_case: Arc<dyn IRegisterAccountUseCase + Send + Sync>,
    ) -> Self {
        self.register_account = use_case;
        self
    }

    pub fn with_login_account(
        mut self,
        use_case: Arc<dyn ILoginAccountUseCase + Send + Sync>,
    ) -> Self {
        self.login_account = use_case;
        self
    }

    pub fn with_logout_account(
        mut self,
        use_case: Arc<dyn ILogoutAccountUseCase + Send + Sync>,
    ) -> Self {
        self.logout_account = use_case;
        self
    }

    pub fn with_refresh_session(
        mut self,
        use_case: Arc<dyn IRefreshSessionUseCase + Send + Sync>,
    ) -> Self {
        self.refresh_session = use_case;
        self
    }

    pub fn with_delete_account(
        mut self,
        use_case: Arc<dyn IDeleteAccountUseCase + Send + Sync>,
    ) -> Self {
        self.delete_account = use_case;
        self
    }

    pub fn with_fetch_profile(
        mut self,
        use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    ) -> Self {
        self.fetch_profile = use_case;
        self
    }

    pub fn with_create_project(
        mut self,
        use_case: Arc<dyn ICreateProjectUseCase + Send + Sync>,
    ) -> Self {
        self.create_project = use_case;
        self
    }

    pub fn with_get_feed(mut self, use_case: Arc<dyn IGetFeedUseCase + Send + Sync>) -> Self {
        self.get_feed = use_case;
        self
    }

    pub fn with_get_owned_projects(
        mut self,
        use_case: Arc<dyn IGetOwnedProjectsUseCase + Send + Sync>,
    ) -> Self {
        self.get_owned_projects = use_case;
        self
    }

    pub fn with_get_liked_projects(
        mut self,
        use_case: Arc<dyn IGetLikedProjectsUseCase + Send + Sync>,
    ) -> Self {
        self.get_liked_projects = use_case;
        self
    }

    pub fn with_download_artifact(
        mut self,
        use_case: Arc<dyn IDownloadArtifactUseCase + Send + Sync>,
    ) -> Self {
        self.download_artifact = use_case;
        self
    }

    pub fn with_toggle_like(mut self, use_case: Arc<dyn IToggleLikeUseCase + Send + Sync>) -> Self {
        self.toggle_like = use_case;
        self
    }

    pub fn with_post_comment(
        mut self,
        use_case: Arc<dyn IPostCommentUseCase + Send + Sync>,
    ) -> Self {
        self.post_comment = use_case;
        self
    }

    pub fn with_edit_comment(
        mut self,
        use_case: Arc<dyn IEditCommentUseCase + Send + Sync>,
    ) -> Self {
        self.edit_comment = use_case;
        self
    }

    pub fn with_get_comments(
        mut self,
        use_case: Arc<dyn IGetCommentsUseCase + Send + Sync>,
    ) -> Self {
        self.get_comments = use_case;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_account_use_case: self.register_account,
            login_account_use_case: self.login_account,
            logout_account_use_case: self.logout_account,
            refresh_session_use_case: self.refresh_session,
            delete_account_use_case: self.delete_account,
            fetch_profile_use_case: self.fetch_profile,
            create_project_use_case: self.create_project,
            get_feed_use_case: self.get_feed,
            get_owned_projects_use_case: self.get_owned_projects,
            get_liked_projects_use_case: self.get_liked_projects,
            download_artifact_use_case: self.download_artifact,
            toggle_like_use_case: self.toggle_like,
            post_comment_use_case: self.post_comment,
            edit_comment_use_case: self.edit_comment,
            get_comments_use_case: self.get_comments,
        })
    }
}
