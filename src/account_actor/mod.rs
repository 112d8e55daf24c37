//! # Account Actor
//!
//! Customer accounts with their standing (active, suspended, banned).
//! Banning keeps the record so order history stays attributable.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::AccountClient;
use crate::framework::ResourceActor;
use crate::model::Account;

/// Creates a new Account actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Account>, AccountClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, AccountClient::new(generic_client))
}
