use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;
use crate::modules::auth::application::ports::outgoing::{AccountQuery, AccountQueryError};

use super::sea_orm_entity::accounts::{
    Column as AccountColumn, Entity as AccountEntity, Model as AccountModel,
};

#[derive(Clone, Debug)]
pub struct AccountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_account(model: AccountModel) -> Account {
        Account {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            contact: model.contact,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl AccountQuery for AccountQueryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountQueryError> {
        let account = AccountEntity::find()
            .filter(AccountColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(account.map(Self::map_to_account))
    }

    async fn find_by_id(&self, account_id: Uuid) -> Result<Option<Account>, AccountQueryError> {
        let account = AccountEntity::find_by_id(account_id)
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        Ok(account.map(Self::map_to_account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn create_mock_account_model(id: Uuid) -> AccountModel {
        AccountModel {
            id,
            username: "testuser".to_string(),
            password_hash: "hashed_password".to_string(),
            contact: None,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_username_success() {
        let account_id = Uuid::new_v4();
        let mock_account = create_mock_account_model(account_id);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_account]])
            .into_connection();

        let query = AccountQueryPostgres::new(Arc::new(db));
        let result = query.find_by_username("testuser").await;

        assert!(result.is_ok());
        let account = result.unwrap().expect("account should be found");
        assert_eq!(account.id, account_id);
        assert_eq!(account.username, "testuser");
    }

    #[tokio::test]
    async fn test_find_by_username_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<AccountModel>::new()])
            .into_connection();

        let query = AccountQueryPostgres::new(Arc::new(db));
        let result = query.find_by_username("nonexistent").await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_success() {
        let account_id = Uuid::new_v4();
        let mock_account = create_mock_account_model(account_id);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_account]])
            .into_connection();

        let query = AccountQueryPostgres::new(Arc::new(db));
        let result = query.find_by_id(account_id).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().unwrap().id, account_id);
    }

    #[tokio::test]
    async fn test_find_by_id_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let query = AccountQueryPostgres::new(Arc::new(db));
        let result = query.find_by_id(Uuid::new_v4()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AccountQueryError::DatabaseError(msg) => {
                assert!(msg.contains("connection timeout"));
            }
        }
    }
}
