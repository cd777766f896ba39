use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    TokenExpired,
    #[error("token not yet valid")]
    TokenNotYetValid,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("malformed token")]
    MalformedToken,
    #[error("expected a '{0}' token")]
    InvalidTokenType(String),
    #[error("token encoding failed: {0}")]
    EncodingError(String),
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, account_id: Uuid) -> Result<String, TokenError>;
    fn generate_refresh_token(&self, account_id: Uuid) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
