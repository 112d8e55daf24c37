//! # Moderation Actor
//!
//! The admin moderation queue. Partners file flags against reviews (through
//! the review store) and users file them against menu entries; admins then
//! approve the content or remove it.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ModerationClient;
use crate::framework::ResourceActor;
use crate::model::FlaggedContent;

/// Creates a new Moderation actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<FlaggedContent>, ModerationClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ModerationClient::new(generic_client))
}
