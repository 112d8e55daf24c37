//! Error types for the Restaurant actor.

use crate::framework::IllegalTransition;
use crate::model::RestaurantStatus;
use thiserror::Error;

/// Errors that can occur during restaurant operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    #[error("Restaurant not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    IllegalTransition(#[from] IllegalTransition<RestaurantStatus>),

    /// Only approved restaurants can be disabled.
    #[error("Cannot disable {id} while it is {status}")]
    NotDisableable { id: String, status: RestaurantStatus },

    #[error("Restaurant validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
