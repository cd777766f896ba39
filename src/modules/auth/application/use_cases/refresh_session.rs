use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use crate::modules::auth::application::ports::outgoing::{
    token_hasher::hash_token, AccountQuery, TokenError, TokenProvider, TokenRepository,
};

// ========================= Refresh Request =========================
#[derive(Debug, Clone)]
pub struct RefreshRequest {
    refresh_token: String,
}

#[derive(Debug, Clone)]
pub enum RefreshRequestError {
    EmptyToken,
}

impl std::fmt::Display for RefreshRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshRequestError::EmptyToken => write!(f, "Refresh token cannot be empty"),
        }
    }
}

impl std::error::Error for RefreshRequestError {}

impl RefreshRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshRequestError> {
        if refresh_token.trim().is_empty() {
            return Err(RefreshRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.trim().to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

impl<'de> Deserialize<'de> for RefreshRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RefreshRequestHelper {
            refresh_token: String,
        }

        let helper = RefreshRequestHelper::deserialize(deserializer)?;
        RefreshRequest::new(helper.refresh_token).map_err(serde::de::Error::custom)
    }
}

// Hand-written schema because Deserialize is manual too.
impl utoipa::PartialSchema for RefreshRequest {
    fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
        use utoipa::openapi::schema::{ObjectBuilder, Type};

        ObjectBuilder::new()
            .property("refresh_token", ObjectBuilder::new().schema_type(Type::String))
            .required("refresh_token")
            .into()
    }
}

impl utoipa::ToSchema for RefreshRequest {
    fn name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("RefreshRequest")
    }
}

// ====================== Refresh Error =============================
#[derive(Debug, Clone)]
pub enum RefreshError {
    TokenExpired,
    TokenInvalid,
    TokenNotYetValid,
    InvalidTokenType,
    InvalidSignature,
    TokenRevoked,
    AccountGone,
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for RefreshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshError::TokenExpired => write!(f, "Refresh token has expired"),
            RefreshError::TokenInvalid => write!(f, "Invalid refresh token"),
            RefreshError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            RefreshError::InvalidTokenType => write!(f, "Invalid token type"),
            RefreshError::InvalidSignature => write!(f, "Invalid token signature"),
            RefreshError::TokenRevoked => write!(f, "Refresh token has been revoked"),
            RefreshError::AccountGone => write!(f, "Account no longer exists"),
            RefreshError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RefreshError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for RefreshError {}

impl From<TokenError> for RefreshError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshError::TokenExpired,
            TokenError::TokenNotYetValid => RefreshError::TokenNotYetValid,
            TokenError::InvalidTokenType(_) => RefreshError::InvalidTokenType,
            TokenError::InvalidSignature => RefreshError::InvalidSignature,
            TokenError::MalformedToken => RefreshError::TokenInvalid,
            TokenError::EncodingError(msg) => RefreshError::TokenGenerationFailed(msg),
        }
    }
}

// ====================== Refresh Response ==========================
#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

// ====================== Refresh Use Case ==========================
#[async_trait]
pub trait IRefreshSessionUseCase: Send + Sync {
    async fn execute(&self, request: RefreshRequest) -> Result<RefreshResponse, RefreshError>;
}

#[derive(Clone)]
pub struct RefreshSessionUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: TokenRepository + Send + Sync,
{
    account_query: Q,
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> RefreshSessionUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: TokenRepository + Send + Sync,
{
    pub fn new(account_query: Q, token_repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            account_query,
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRefreshSessionUseCase for RefreshSessionUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: TokenRepository + Send + Sync,
{
    async fn execute(&self, request: RefreshRequest) -> Result<RefreshResponse, RefreshError> {
        let claims = self
            .token_provider
            .verify_token(request.refresh_token())
            .map_err(RefreshError::from)?;

        if claims.token_type != "refresh" {
            return Err(RefreshError::InvalidTokenType);
        }

        let token_hash = hash_token(request.refresh_token());
        let revoked = self
            .token_repository
            .is_token_blacklisted(&token_hash)
            .await
            .map_err(|e| RefreshError::QueryError(e.to_string()))?;
        if revoked {
            return Err(RefreshError::TokenRevoked);
        }

        // A deleted account must not be able to mint new access tokens
        let account = self
            .account_query
            .find_by_id(claims.sub)
            .await
            .map_err(|e| RefreshError::QueryError(e.to_string()))?;
        if account.is_none() {
            return Err(RefreshError::AccountGone);
        }

        let access_token = self
            .token_provider
            .generate_access_token(claims.sub)
            .map_err(|e| RefreshError::TokenGenerationFailed(e.to_string()))?;

        Ok(RefreshResponse { access_token })
    }
}
