use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError,
};

// Possible errors for deleting an account
#[derive(Debug, Clone)]
pub enum DeleteAccountError {
    AccountNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for DeleteAccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteAccountError::AccountNotFound => write!(f, "Account not found"),
            DeleteAccountError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteAccountError {}

// Interface for DeleteAccount use case
#[async_trait]
pub trait IDeleteAccountUseCase: Send + Sync {
    /// Delete the given account together with all of its projects, comments
    /// and likes. The caller supplies the identity explicitly; there is no
    /// ambient "current user".
    async fn execute(&self, account_id: Uuid) -> Result<(), DeleteAccountError>;
}

#[derive(Debug, Clone)]
pub struct DeleteAccountUseCase<R>
where
    R: AccountRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteAccountUseCase<R>
where
    R: AccountRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteAccountUseCase for DeleteAccountUseCase<R>
where
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, account_id: Uuid) -> Result<(), DeleteAccountError> {
        self.repository
            .delete_account_cascade(account_id)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::AccountNotFound => DeleteAccountError::AccountNotFound,
                other => DeleteAccountError::RepositoryError(other.to_string()),
            })
    }
}
