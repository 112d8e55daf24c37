//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber once, at the top of
//! `main`. Tests never call it.
//!
//! ## Configuration
//!
//! Levels come from `RUST_LOG`. Output is compact and hides the module path
//! (`with_target(false)`); each actor tags its events with `entity_type`
//! instead.
//!
//! ```bash
//! # Lifecycle, status changes and confirmations
//! RUST_LOG=info cargo run
//!
//! # Full payloads and every store request
//! RUST_LOG=debug cargo run
//!
//! # Only the store plumbing
//! RUST_LOG=nutri_order::framework=debug cargo run
//! ```
//!
//! ## What Gets Logged
//!
//! - `info!`: actor start/stop, created/updated/deleted records, and the
//!   confirmation text a user sees after a change ("Order Accepted",
//!   "Restaurant Approved", "Your reply has been posted").
//! - `debug!`: request payloads, listings with match counts.
//! - `warn!`: rejected requests (illegal transitions, validation failures,
//!   missing ids).
//!
//! With `RUST_LOG=info` accepting the new order on the partner dashboard
//! looks like:
//!
//! ```text
//! INFO partner_dashboard:accept: Action ok entity_type="Order" id=ORD-006
//! INFO partner_dashboard:accept: Order Accepted id=ORD-006 eta=20-30 mins
//! ```
//!
//! and an illegal step is reported before the error reaches the caller:
//!
//! ```text
//! WARN partner_dashboard:transition: Action failed entity_type="Order" id=ORD-001 error=illegal transition from completed to preparing
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
