//! Admin error types.

use thiserror::Error;

use lisan_shared::AppError;
use lisan_shared::types::UserId;

/// Errors raised while resolving admin context or listing members.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The acting user does not exist.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// The acting user lacks an admin flag or a capability.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Admin flag set, but no scope can be resolved.
    #[error("invalid admin configuration: {0}")]
    InvalidConfiguration(String),

    /// The data store failed.
    #[error("data access error: {0}")]
    DataAccess(String),
}

impl AdminError {
    /// Create a data access error.
    #[must_use]
    pub fn data_access(msg: impl Into<String>) -> Self {
        Self::DataAccess(msg.into())
    }
}

impl From<AdminError> for AppError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::NotFound(id) => Self::NotFound(format!("user {id}")),
            AdminError::Forbidden(msg) => Self::Forbidden(msg),
            AdminError::InvalidConfiguration(msg) => Self::BusinessRule(msg),
            AdminError::DataAccess(msg) => Self::Database(msg),
        }
    }
}
