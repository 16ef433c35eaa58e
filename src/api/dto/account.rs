use crate::api::dto::validation::{is_email, is_name};
use crate::domain::models::account::{Account, AccountFields};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    #[schema(examples(1))]
    id: i64,
    name: String,
    email: String,
    address: Option<String>,
    phone_number: Option<String>,
    #[schema(value_type = String, format = Date, examples("2026-01-31"))]
    date_joined: NaiveDate,
}

/// Body of `POST /accounts` and `PUT /accounts/{id}`. Any `id` key in the
/// body is ignored.
#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct AccountPayloadDTO {
    #[validate(custom(function = "is_name"))]
    #[schema(examples("Alice"))]
    pub name: String,

    #[validate(custom(function = "is_email"))]
    #[schema(examples("alice@example.com"))]
    pub email: String,

    #[serde(default)]
    #[schema(examples("1 Main St"))]
    pub address: Option<String>,

    #[serde(default)]
    #[schema(examples("555-0100"))]
    pub phone_number: Option<String>,

    /// Defaults to the current UTC date.
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, examples("2026-01-31"))]
    pub date_joined: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthDTO {
    #[schema(examples("OK"))]
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfoDTO {
    #[schema(examples("Account REST API Service"))]
    pub name: String,
    #[schema(examples("1.0"))]
    pub version: String,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
            address: val.address,
            phone_number: val.phone_number,
            date_joined: val.date_joined,
        }
    }
}

impl From<AccountPayloadDTO> for AccountFields {
    fn from(payload: AccountPayloadDTO) -> Self {
        AccountFields {
            name: payload.name,
            email: payload.email,
            address: payload.address,
            phone_number: payload.phone_number,
            date_joined: payload
                .date_joined
                .unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}
