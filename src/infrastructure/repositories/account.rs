use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account::{Account, AccountFields};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountContent};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";

// A single statement runs in one transaction, so bumping the counter and
// creating the record cannot interleave with a concurrent create.
const CREATE_WITH_NEXT_ID: &str = "
    CREATE type::thing($table, (
        UPSERT type::thing('counter', $table) SET seq = (seq ?? 0) + 1 RETURN VALUE seq
    )[0]) CONTENT $content
";

fn into_account(account: Option<SurrealAccount>) -> RepositoryResult<Option<Account>> {
    account.map(Account::try_from).transpose()
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn create(&self, fields: AccountFields) -> RepositoryResult<Account> {
        let account: Option<SurrealAccount> = self
            .db
            .query(CREATE_WITH_NEXT_ID)
            .bind(("table", ACCOUNT))
            .bind(("content", SurrealAccountContent::from(fields)))
            .await?
            .take(0)?;

        into_account(account)?.ok_or_else(|| RepositoryError::Missing(ACCOUNT.to_string()))
    }

    async fn find(&self, id: i64) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = self.db.select((ACCOUNT, id)).await?;

        into_account(account)
    }

    async fn all(&self) -> RepositoryResult<Vec<Account>> {
        let accounts: Vec<SurrealAccount> = self.db.select(ACCOUNT).await?;

        let mut accounts = accounts
            .into_iter()
            .map(Account::try_from)
            .collect::<RepositoryResult<Vec<_>>>()?;

        accounts.sort_by_key(|account| account.id);

        Ok(accounts)
    }

    async fn update(&self, account: Account) -> RepositoryResult<Option<Account>> {
        let updated: Option<SurrealAccount> = self
            .db
            .update((ACCOUNT, account.id))
            .content(SurrealAccountContent::from(account))
            .await?;

        into_account(updated)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let _: Option<SurrealAccount> = self.db.delete((ACCOUNT, id)).await?;

        Ok(())
    }
}
