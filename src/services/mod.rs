use pushkind_common::repository::errors::RepositoryError;
use thiserror::Error;

pub mod access;
pub mod aggregate;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod menus;
pub mod orders;
pub mod restaurants;
pub mod staff;

/// Result type returned by every service.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by services.
///
/// `NotFound`, `Forbidden`, `Unprocessable` and `Form` are raised where they are
/// detected and travel unchanged; anything unexpected becomes `Internal`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The caller has no activated membership or an insufficient role.
    #[error("{0}")]
    Forbidden(String),
    /// The request is well-formed but breaks a business rule.
    #[error("{0}")]
    Unprocessable(String),
    /// The request payload failed shape validation.
    #[error("{0}")]
    Form(String),
    /// Storage fault or other unexpected failure.
    #[error("internal error")]
    Internal,
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        ServiceError::NotFound(format!("{entity} not found"))
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound("Record not found".to_string()),
            other => {
                log::error!("Repository failure: {other}");
                ServiceError::Internal
            }
        }
    }
}
