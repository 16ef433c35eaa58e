use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub date_joined: NaiveDate,
}

/// User-supplied fields of an account. Used both to create an account and
/// to overwrite every mutable field of an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFields {
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub date_joined: NaiveDate,
}

impl Account {
    pub fn with_fields(id: i64, fields: AccountFields) -> Self {
        Account {
            id,
            name: fields.name,
            email: fields.email,
            address: fields.address,
            phone_number: fields.phone_number,
            date_joined: fields.date_joined,
        }
    }
}
