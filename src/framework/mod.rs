//! Generic store framework for status-tagged records.
//!
//! This module provides the building blocks every portal shares: one
//! canonical store per record type, reached through cloneable clients, plus
//! the status workflow and search helpers that sit on top of it.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be kept in a store
//! - [`ResourceActor`] - Generic actor that owns a record collection
//! - [`ResourceClient`] - Typed async handle to a `ResourceActor`
//! - [`ActorClient`] / [`WorkflowClient`] - Traits domain clients implement
//! - [`Status`] / [`StatusTagged`] - Explicit transition tables
//! - [`Searchable`] - Case-insensitive free-text filtering
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod search;
pub mod workflow;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::{ActorClient, WorkflowClient};
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Predicate, ResourceRequest, Response};
pub use search::{filter_records, matches_query, Searchable};
pub use workflow::{IllegalTransition, ListQuery, ParseStatusError, Status, StatusFilter, StatusTagged};
