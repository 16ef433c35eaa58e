use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    models::account::{Account, AccountFields},
    repositories::account::AccountRepository,
    services::account::AccountService,
};

use async_trait::async_trait;
use tracing::info;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    async fn find(&self, id: i64) -> AppResult<Option<Account>> {
        Ok(self.repository.find(id).await?)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Account with id {id} not found"))
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn create(&self, fields: AccountFields) -> AppResult<Account> {
        let account = self.repository.create(fields).await?;

        info!(account_id = account.id, "Account created");

        Ok(account)
    }

    async fn list(&self) -> AppResult<Vec<Account>> {
        let accounts = self.repository.all().await?;

        info!("Returning [{}] accounts", accounts.len());

        Ok(accounts)
    }

    async fn read(&self, id: i64) -> AppResult<Account> {
        self.find(id).await?.ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: i64, fields: AccountFields) -> AppResult<Account> {
        let account = match self.find(id).await? {
            Some(account) => account,
            None => return Err(not_found(id)),
        };

        self.repository
            .update(Account::with_fields(account.id, fields))
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if let Some(account) = self.find(id).await? {
            self.repository.delete(account.id).await?;
            info!(account_id = id, "Account deleted");
        }

        Ok(())
    }
}
