//! Administrator service error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors from the administrator service.
///
/// Rejected credentials are not an error: `login` reports them as
/// `Ok(None)`. Everything here is an infrastructure failure except
/// `AlreadyRegistered`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The mail address was taken between the uniqueness check and the insert.
    #[error("mail address already registered")]
    AlreadyRegistered,

    /// Password hashing failed.
    #[error("password hashing error")]
    PasswordHash,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
