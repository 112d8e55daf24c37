use crate::moderation_actor::ModerationError;
use thiserror::Error;

/// Errors that can occur during review operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    #[error("Review not found: {0}")]
    NotFound(String),

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Reply cannot be empty")]
    EmptyReply,

    #[error("Please provide a reason for flagging")]
    MissingFlagReason,

    #[error("Review {0} has already been flagged")]
    AlreadyFlagged(String),

    #[error("Review validation error: {0}")]
    ValidationError(String),

    /// Filing the flag with the moderation queue failed.
    #[error("Moderation error: {0}")]
    Moderation(#[from] ModerationError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
