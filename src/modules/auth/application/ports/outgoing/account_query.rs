use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountQueryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AccountQuery: Send + Sync {
    async fn find_by_username(&self, username: &str)
        -> Result<Option<Account>, AccountQueryError>;

    async fn find_by_id(&self, account_id: Uuid) -> Result<Option<Account>, AccountQueryError>;
}
