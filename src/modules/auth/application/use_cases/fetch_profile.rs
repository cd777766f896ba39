use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::AccountQuery;

#[derive(Debug, Clone)]
pub enum FetchProfileError {
    AccountNotFound,
    QueryError(String),
}

impl std::fmt::Display for FetchProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchProfileError::AccountNotFound => write!(f, "Account not found"),
            FetchProfileError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for FetchProfileError {}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileView {
    pub id: Uuid,
    pub username: String,
    pub contact: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, account_id: Uuid) -> Result<ProfileView, FetchProfileError>;
}

#[derive(Debug, Clone)]
pub struct FetchProfileUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchProfileUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchProfileUseCase for FetchProfileUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, account_id: Uuid) -> Result<ProfileView, FetchProfileError> {
        let account = self
            .query
            .find_by_id(account_id)
            .await
            .map_err(|e| FetchProfileError::QueryError(e.to_string()))?
            .ok_or(FetchProfileError::AccountNotFound)?;

        Ok(ProfileView {
            id: account.id,
            username: account.username,
            contact: account.contact,
            created_at: account.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Account;
    use crate::modules::auth::application::ports::outgoing::AccountQueryError;

    struct MockAccountQuery {
        account: Option<Account>,
        should_fail: bool,
    }

    #[async_trait]
    impl AccountQuery for MockAccountQuery {
        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<Account>, AccountQueryError> {
            Ok(None)
        }

        async fn find_by_id(
            &self,
            _account_id: Uuid,
        ) -> Result<Option<Account>, AccountQueryError> {
            if self.should_fail {
                return Err(AccountQueryError::DatabaseError(
                    "Database error".to_string(),
                ));
            }
            Ok(self.account.clone())
        }
    }

    #[tokio::test]
    async fn test_fetch_profile_success() {
        let account = Account {
            id: Uuid::new_v4(),
            username: "testuser".to_string(),
            password_hash: "hash".to_string(),
            contact: Some("test@example.com".to_string()),
            created_at: Utc::now(),
        };
        let use_case = FetchProfileUseCase::new(MockAccountQuery {
            account: Some(account.clone()),
            should_fail: false,
        });

        let result = use_case.execute(account.id).await.unwrap();

        assert_eq!(result.id, account.id);
        assert_eq!(result.username, "testuser");
        assert_eq!(result.contact.as_deref(), Some("test@example.com"));
    }

    #[tokio::test]
    async fn test_fetch_profile_not_found() {
        let use_case = FetchProfileUseCase::new(MockAccountQuery {
            account: None,
            should_fail: false,
        });

        let result = use_case.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(FetchProfileError::AccountNotFound)));
    }

    #[tokio::test]
    async fn test_fetch_profile_query_error() {
        let use_case = FetchProfileUseCase::new(MockAccountQuery {
            account: None,
            should_fail: true,
        });

        let result = use_case.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(FetchProfileError::QueryError(_))));
    }
}
