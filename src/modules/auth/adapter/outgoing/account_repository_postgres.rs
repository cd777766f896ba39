use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbBackend, Set, Statement,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;
use crate::modules::auth::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, NewAccount,
};

use super::sea_orm_entity::accounts::{ActiveModel as AccountActiveModel, Model as AccountModel};

#[derive(Clone, Debug)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
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
impl AccountRepository for AccountRepositoryPostgres {
    async fn create_account(&self, account: NewAccount) -> Result<Account, AccountRepositoryError> {
        let active_account = AccountActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(account.username),
            password_hash: Set(account.password_hash),
            contact: Set(account.contact),
            created_at: Set(chrono::Utc::now().into()),
        };

        let inserted = active_account.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return AccountRepositoryError::UsernameTaken;
            }
            AccountRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(Self::map_to_account(inserted))
    }

    async fn delete_account_cascade(
        &self,
        account_id: Uuid,
    ) -> Result<(), AccountRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        // Children first: likes reference projects, so they go before projects.
        for sql in [
            "DELETE FROM likes WHERE account_id = $1 \
             OR project_id IN (SELECT id FROM projects WHERE account_id = $1)",
            "DELETE FROM comments WHERE account_id = $1",
            "DELETE FROM projects WHERE account_id = $1",
        ] {
            txn.execute(Statement::from_sql_and_values(
                DbBackend::Postgres,
                sql,
                [account_id.into()],
            ))
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;
        }

        let deleted = txn
            .execute(Statement::from_sql_and_values(
                DbBackend::Postgres,
                "DELETE FROM accounts WHERE id = $1",
                [account_id.into()],
            ))
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        if deleted.rows_affected() == 0 {
            txn.rollback()
                .await
                .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;
            return Err(AccountRepositoryError::AccountNotFound);
        }

        txn.commit()
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
