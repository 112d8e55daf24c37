use crate::framework::IllegalTransition;
use crate::model::AccountStatus;
use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    #[error("Account not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    IllegalTransition(#[from] IllegalTransition<AccountStatus>),

    #[error("Account validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
