use async_trait::async_trait;

use crate::domain::models::account::{Account, AccountFields};

use super::repository::RepositoryResult;

/// Data-access collaborator owning account storage.
///
/// Implementations allocate ids and are responsible for their own
/// concurrency safety.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, fields: AccountFields) -> RepositoryResult<Account>;
    async fn find(&self, id: i64) -> RepositoryResult<Option<Account>>;
    async fn all(&self) -> RepositoryResult<Vec<Account>>;
    /// Returns `None` when no account with `account.id` exists.
    async fn update(&self, account: Account) -> RepositoryResult<Option<Account>>;
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}
