use crate::domain::models::account::{Account, AccountFields};
use crate::domain::repositories::account::AccountRepository;
use crate::infrastructure::repositories::account::AccountRepositoryImpl;
use ::surrealdb::{Surreal, engine::remote::ws::Client};
use chrono::NaiveDate;
use std::sync::Arc;

pub async fn seed_account(conn: &Surreal<Client>) -> Account {
    AccountRepositoryImpl::new(Arc::new(conn.clone()))
        .create(AccountFields {
            name: "Test Account".to_string(),
            email: "test_account@email.com".to_string(),
            address: Some("12 Test Street".to_string()),
            phone_number: Some("555-0199".to_string()),
            date_joined: NaiveDate::from_ymd_opt(2023, 3, 14).unwrap(),
        })
        .await
        .unwrap()
}

pub async fn count_accounts(conn: &Surreal<Client>) -> usize {
    AccountRepositoryImpl::new(Arc::new(conn.clone()))
        .all()
        .await
        .unwrap()
        .len()
}
