//! # Review Actor
//!
//! Customer reviews for the partner reviews page. Replies stay on the review;
//! flags are forwarded to the moderation queue, so this actor is started with
//! a [`ModerationClient`](crate::clients::ModerationClient) as its context:
//!
//! ```rust,ignore
//! let (review_actor, review_client) = review_actor::new(32);
//! tokio::spawn(review_actor.run(moderation_client.clone()));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ReviewClient;
use crate::framework::ResourceActor;
use crate::model::Review;

/// Creates a new Review actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Review>, ReviewClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ReviewClient::new(generic_client))
}
