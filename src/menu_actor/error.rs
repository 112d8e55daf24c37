use crate::framework::IllegalTransition;
use crate::model::Availability;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Menu item not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    IllegalTransition(#[from] IllegalTransition<Availability>),

    #[error("Menu item validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
