use async_trait::async_trait;
use serde::Serialize;

use crate::modules::auth::application::ports::outgoing::{
    AccountQuery, PasswordHasher, TokenProvider,
};

// ====================== Login Error =============================
#[derive(Debug, Clone)]
pub enum LoginError {
    InvalidCredentials,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid username or password"),
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ====================== Login Response ==========================
#[derive(Debug, Clone, Serialize)]
pub struct AccountInfo {
    pub id: uuid::Uuid,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginAccountResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub account: AccountInfo,
}

// ====================== Login Use Case ==========================
#[async_trait]
pub trait ILoginAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        username: String,
        password: String,
    ) -> Result<LoginAccountResponse, LoginError>;
}

#[derive(Debug, Clone)]
pub struct LoginAccountUseCase<Q, H, T>
where
    Q: AccountQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    query: Q,
    password_hasher: H,
    token_provider: T,
}

impl<Q, H, T> LoginAccountUseCase<Q, H, T>
where
    Q: AccountQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    pub fn new(query: Q, password_hasher: H, token_provider: T) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, H, T> ILoginAccountUseCase for LoginAccountUseCase<Q, H, T>
where
    Q: AccountQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    async fn execute(
        &self,
        username: String,
        password: String,
    ) -> Result<LoginAccountResponse, LoginError> {
        // Unknown username and wrong password both collapse into
        // InvalidCredentials so the response does not leak which one it was.
        let account = self
            .query
            .find_by_username(username.trim())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(&password, &account.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(account.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(account.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginAccountResponse {
            access_token,
            refresh_token,
            account: AccountInfo {
                id: account.id,
                username: account.username,
            },
        })
    }
}
