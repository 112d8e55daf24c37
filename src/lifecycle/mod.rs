//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the record stores behind the three portals.
//!
//! ## The PlatformSystem Pattern
//!
//! [`PlatformSystem`] creates one actor per record type and keeps the client
//! handles every page works through:
//!
//! ```rust,ignore
//! let (moderation_actor, moderation_client) = moderation_actor::new(cap);
//! let (review_actor, review_client) = review_actor::new(cap);
//!
//! tokio::spawn(moderation_actor.run(()));
//! // Flagging a review files a report, so reviews get the moderation client.
//! tokio::spawn(review_actor.run(moderation_client.clone()));
//! ```
//!
//! Dependencies are injected when the run loop starts, not when the actor is
//! built, so wiring order never matters.
//!
//! ## Shutdown
//!
//! Dropping every client closes the channels; each run loop then drains and
//! exits, and [`PlatformSystem::shutdown`] awaits the task handles.
//!
//! ## Timers
//!
//! [`progress`] owns the one piece of background work outside the actors: the
//! order tracking page's demo auto-advance.

pub mod platform;
pub mod progress;
pub mod tracing;

pub use platform::*;
pub use progress::*;
