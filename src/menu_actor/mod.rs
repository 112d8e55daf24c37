//! # Menu Actor
//!
//! A partner's menu. Availability is a two-state workflow so the same list
//! filters and transition checks apply as for orders.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::MenuClient;
use crate::framework::ResourceActor;
use crate::model::MenuItem;

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MenuClient::new(generic_client))
}
