use sqlx::error::ErrorKind;
use thiserror::Error;

/// Errors surfaced by the store.
///
/// Constraint failures (duplicate email, dangling foreign key, over-length
/// string, missing required field) all land in [`ConstraintViolation`]; the
/// caller decides how to map them to a user-facing response. Everything else
/// is passed through untranslated.
///
/// [`ConstraintViolation`]: StoreError::ConstraintViolation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return Self::ConstraintViolation(db_err.message().to_string());
                }
                _ => {}
            }
        }
        Self::Database(err)
    }
}
