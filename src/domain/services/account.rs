use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, AccountFields};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn create(&self, fields: AccountFields) -> AppResult<Account>;
    async fn list(&self) -> AppResult<Vec<Account>>;
    async fn read(&self, id: i64) -> AppResult<Account>;
    async fn update(&self, id: i64, fields: AccountFields) -> AppResult<Account>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}
