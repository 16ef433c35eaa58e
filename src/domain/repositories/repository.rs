use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
    #[error("record id is not an integer: {0}")]
    InvalidId(String),
    #[error("record was not returned by the database: {0}")]
    Missing(String),
}
