use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::models::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,
    #[error("Referenced record does not exist: {0}")]
    Reference(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Constraint violated: {0}")]
    Constraint(String),
    #[error("Database error: {0}")]
    Database(DieselError),
    #[error("Connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("Migration error: {0}")]
    Migration(String),
}

impl From<DieselError> for StoreError {
    fn from(e: DieselError) -> Self {
        match e {
            DieselError::NotFound => StoreError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                StoreError::Reference(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
                StoreError::Constraint(info.message().to_string())
            }
            e => StoreError::Database(e),
        }
    }
}
