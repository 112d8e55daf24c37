//! # ActorEntity Trait
//!
//! The contract every record type (orders, restaurants, accounts, flagged
//! content, menu items, reviews) implements to be kept in a [`ResourceActor`].
//! Associated types pin down the id, the create/update payloads, the custom
//! actions and the error type, so a restaurant application can never be sent
//! to the order store.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.
//! Override them to validate a new record or to veto a removal.
//!
//! [`ResourceActor`]: crate::framework::ResourceActor

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they can call other stores. The `Context` type is
/// injected into every hook when the actor is started, which lets a store
/// depend on clients created after it (late binding).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// Enum of record-specific operations (e.g. `Accept { eta }`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this record.
    ///
    /// One enum per store rather than one per action: clients match on a
    /// single `OrderError`, at the price of that enum being the union of every
    /// failure the store can produce.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The record's own identifier. Used when seeding fixtures.
    fn id(&self) -> &Self::Id;

    /// Construct the full record from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed. Returning an error
    /// keeps the record in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
