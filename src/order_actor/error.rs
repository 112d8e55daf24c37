//! Error types for the Order actor.

use crate::framework::IllegalTransition;
use crate::model::OrderStatus;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The requested status change is not an edge of the order workflow.
    #[error(transparent)]
    IllegalTransition(#[from] IllegalTransition<OrderStatus>),

    /// The quoted preparation window is empty or inverted.
    #[error("Invalid ETA: {min}-{max} mins")]
    InvalidEta { min: u32, max: u32 },

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
