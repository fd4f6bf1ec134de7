//! Orchestration layer between the web adapters and the repositories.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod customer;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested record does not exist. Non-fatal; surfaces as a 404.
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
