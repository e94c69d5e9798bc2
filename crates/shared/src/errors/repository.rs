use sqlx::Error as SqlxError;
use thiserror::Error;

const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Maps a unique-constraint violation to `AlreadyExists`, anything else to `Sqlx`.
    pub fn from_insert(err: SqlxError, subject: &str) -> Self {
        match &err {
            SqlxError::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                RepositoryError::AlreadyExists(subject.to_string())
            }
            _ => RepositoryError::Sqlx(err),
        }
    }
}
