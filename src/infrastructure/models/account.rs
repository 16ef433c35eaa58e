use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::sql::{Id, Thing};

use crate::domain::models::account::{Account, AccountFields};
use crate::domain::repositories::repository::RepositoryError;

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    id: Thing,
    name: String,
    email: String,
    address: Option<String>,
    phone_number: Option<String>,
    date_joined: NaiveDate,
}

#[derive(Serialize)]
pub struct SurrealAccountContent {
    name: String,
    email: String,
    address: Option<String>,
    phone_number: Option<String>,
    date_joined: NaiveDate,
}

impl From<AccountFields> for SurrealAccountContent {
    fn from(fields: AccountFields) -> Self {
        SurrealAccountContent {
            name: fields.name,
            email: fields.email,
            address: fields.address,
            phone_number: fields.phone_number,
            date_joined: fields.date_joined,
        }
    }
}

impl From<Account> for SurrealAccountContent {
    fn from(acc: Account) -> Self {
        SurrealAccountContent {
            name: acc.name,
            email: acc.email,
            address: acc.address,
            phone_number: acc.phone_number,
            date_joined: acc.date_joined,
        }
    }
}

impl TryFrom<SurrealAccount> for Account {
    type Error = RepositoryError;

    fn try_from(acc: SurrealAccount) -> Result<Self, Self::Error> {
        let id = match &acc.id.id {
            Id::Number(id) => *id,
            _ => return Err(RepositoryError::InvalidId(acc.id.to_string())),
        };

        Ok(Account {
            id,
            name: acc.name,
            email: acc.email,
            address: acc.address,
            phone_number: acc.phone_number,
            date_joined: acc.date_joined,
        })
    }
}
