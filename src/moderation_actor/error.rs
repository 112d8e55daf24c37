use crate::framework::IllegalTransition;
use crate::model::ModerationStatus;
use thiserror::Error;

/// Errors that can occur while filing or deciding a flag.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModerationError {
    #[error("Flagged content not found: {0}")]
    NotFound(String),

    /// A flag was decided twice.
    #[error(transparent)]
    IllegalTransition(#[from] IllegalTransition<ModerationStatus>),

    #[error("Please provide a reason for flagging")]
    MissingReason,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
