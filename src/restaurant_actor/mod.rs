//! # Restaurant Actor
//!
//! Partner applications and approved restaurants, as managed from the admin
//! restaurants page.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Restaurant`]
//! - [`error`] - [`RestaurantError`]
//! - [`actions`] - [`RestaurantAction`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RestaurantClient;
use crate::framework::ResourceActor;
use crate::model::Restaurant;

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RestaurantClient::new(generic_client))
}
