//! Error type shared by every entity hook and manager operation.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Failure of a delivery operation.
///
/// The first four variants are domain outcomes a transport maps to distinct
/// statuses. `Store` means the backing actor could not be reached.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// A referenced record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A business rule was violated (inactive record, illegal transition, duplicate key...).
    #[error("Business rule violated: {0}")]
    Business(String),

    /// The caller is not allowed to act on the target record.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Malformed input, rejected before any lookup.
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Store unavailable: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, DeliveryError>;

impl From<FrameworkError> for DeliveryError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => DeliveryError::NotFound(id),
            FrameworkError::Conflict(reason) => DeliveryError::Business(reason),
            // Hooks raise DeliveryError; recover it as-is.
            FrameworkError::EntityError(inner) => match inner.downcast::<DeliveryError>() {
                Ok(original) => *original,
                Err(other) => DeliveryError::Store(other.to_string()),
            },
            other @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                DeliveryError::Store(other.to_string())
            }
        }
    }
}
