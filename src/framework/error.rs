//! # Framework Errors
//!
//! Common error types shared by every store and client. Entity-specific
//! failures travel inside [`FrameworkError::EntityError`] and are recovered
//! with [`FrameworkError::into_entity_error`].

use std::error::Error;

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn Error + Send + Sync>),
}

impl FrameworkError {
    /// Converts this error into an entity's own error type.
    ///
    /// `EntityError`s that already hold an `E` are unwrapped as-is, `NotFound`
    /// is handed to `not_found`, and everything else is rendered through
    /// `communication`.
    pub fn into_entity_error<E>(
        self,
        not_found: impl FnOnce(String) -> E,
        communication: impl FnOnce(String) -> E,
    ) -> E
    where
        E: Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::NotFound(id) => not_found(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => *typed,
                Err(other) => communication(other.to_string()),
            },
            other => communication(other.to_string()),
        }
    }
}
