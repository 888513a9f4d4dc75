// src/application/error.rs
use crate::domain::errors::{DomainError, DomainResult};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
        }
    }
}

/// Turns a client-supplied key (path id, slug, referenced id) into its value
/// object. A key no stored row can carry is reported as `missing` instead of
/// as invalid input.
pub(crate) fn resolve_key<T>(key: DomainResult<T>, missing: &str) -> ApplicationResult<T> {
    key.map_err(|err| match err {
        DomainError::Validation(_) => ApplicationError::not_found(missing),
        other => other.into(),
    })
}
