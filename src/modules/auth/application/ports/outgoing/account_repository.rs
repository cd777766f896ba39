use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;

/// Data required to create an account. The hash is produced by the
/// `PasswordHasher` port before it reaches the repository.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password_hash: String,
    pub contact: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountRepositoryError {
    #[error("username already exists")]
    UsernameTaken,
    #[error("account not found")]
    AccountNotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account. Uniqueness of the username is enforced by the
    /// database constraint, not by a prior lookup, so two racing
    /// registrations cannot both succeed.
    async fn create_account(&self, account: NewAccount) -> Result<Account, AccountRepositoryError>;

    /// Remove every like, comment and project belonging to the account and
    /// then the account row itself, all inside one transaction. A failure
    /// partway rolls the whole cascade back.
    async fn delete_account_cascade(&self, account_id: Uuid)
        -> Result<(), AccountRepositoryError>;
}
