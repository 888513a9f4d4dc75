// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure kinds signalled by value objects and repositories.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Rejects blank text, returning the value untouched otherwise.
pub(crate) fn non_blank(value: String, field: &str) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(value)
}

/// Identifiers are database serials and therefore strictly positive.
pub(crate) fn positive_id(id: i64, entity: &str) -> DomainResult<i64> {
    if id <= 0 {
        return Err(DomainError::validation(format!(
            "{entity} id must be positive"
        )));
    }
    Ok(id)
}
