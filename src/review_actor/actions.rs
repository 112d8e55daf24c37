//! Custom actions for the Review actor.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    /// Posts (or replaces) the restaurant's public reply.
    Reply(String),
    /// Reports the review to the admin moderation queue.
    Flag { reason: String },
}
