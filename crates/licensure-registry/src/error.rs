use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("license not found: {id}")]
    NotFound { id: Uuid },

    #[error("invalid state transition for license {id}: {reason}")]
    InvalidStateTransition { id: Uuid, reason: String },

    #[error("delete confirmation does not match license number")]
    ConfirmationMismatch,

    #[error(transparent)]
    Validation(#[from] licensure_core::error::CoreError),

    #[error("seed deserialization error: {0}")]
    Seed(#[from] serde_json::Error),
}
