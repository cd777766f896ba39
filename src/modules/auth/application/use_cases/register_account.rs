use async_trait::async_trait;
use serde::Serialize;

use crate::modules::auth::application::domain::entities::Account;
use crate::modules::auth::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, NewAccount, PasswordHasher,
};

// Possible errors for registering an account
#[derive(Debug, Clone)]
pub enum RegisterError {
    InvalidUsername,
    InvalidPassword,
    UsernameTaken,
    HashingFailed(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::InvalidUsername => {
                write!(f, "Username must be at least 3 characters long")
            }
            RegisterError::InvalidPassword => {
                write!(f, "Password must be at least 6 characters long")
            }
            RegisterError::UsernameTaken => write!(f, "Username already exists"),
            RegisterError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterError {}

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredAccount {
    pub id: uuid::Uuid,
    pub username: String,
}

// Interface for RegisterAccount use case
#[async_trait]
pub trait IRegisterAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        username: String,
        password: String,
        contact: Option<String>,
    ) -> Result<RegisteredAccount, RegisterError>;
}

// Implementation of RegisterAccount use case
#[derive(Debug, Clone)]
pub struct RegisterAccountUseCase<R, H>
where
    R: AccountRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    repository: R,
    password_hasher: H,
}

impl<R, H> RegisterAccountUseCase<R, H>
where
    R: AccountRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    pub fn new(repository: R, password_hasher: H) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R, H> IRegisterAccountUseCase for RegisterAccountUseCase<R, H>
where
    R: AccountRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(
        &self,
        username: String,
        password: String,
        contact: Option<String>,
    ) -> Result<RegisteredAccount, RegisterError> {
        let username = username.trim().to_string();
        if username.chars().count() < 3 {
            return Err(RegisterError::InvalidUsername);
        }
        if password.chars().count() < 6 {
            return Err(RegisterError::InvalidPassword);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&password)
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        // No prior existence check: the unique constraint on username is the
        // single arbiter, so concurrent registrations cannot both win.
        let account = self
            .repository
            .create_account(NewAccount {
                username,
                password_hash,
                contact,
            })
            .await
            .map_err(|e| match e {
                AccountRepositoryError::UsernameTaken => RegisterError::UsernameTaken,
                other => RegisterError::RepositoryError(other.to_string()),
            })?;

        Ok(RegisteredAccount {
            id: account.id,
            username: account.username,
        })
    }
}
