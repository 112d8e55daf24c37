//! # NutriOrder
//!
//! > **Status workflows and record stores behind a food-ordering platform.**
//!
//! NutriOrder has three portals (customer, restaurant partner, admin) that
//! all look at the same handful of record types: orders, restaurants,
//! customer accounts, flagged content, menu items and reviews. Each record
//! carries a status, and each status change a button can make is checked
//! against an explicit edge table before it is applied.
//!
//! ## 🏗️ Design
//!
//! ### One store per record type
//! Every record type lives in exactly one [`ResourceActor`](framework::ResourceActor)
//! running on its own Tokio task. Pages never keep private copies; they read
//! and write through cloneable clients, so the partner dashboard and the
//! admin orders table always agree.
//!
//! ### Status workflow
//! Record types implement [`StatusTagged`](framework::StatusTagged) with a
//! status enum declared through [`status_enum!`]. The macro carries the
//! adjacency table, so "can this order go from `ready` to `preparing`?" is
//! answered in one place. Listing by status tab, free-text search and extra
//! filters compose into a [`ListQuery`](framework::ListQuery).
//!
//! ### Typed errors
//! Each store has its own `thiserror` enum (`OrderError`, `RestaurantError`,
//! ...). Illegal transitions, missing ids and validation failures come back
//! as values; nothing fails silently.
//!
//! ### Observability
//! `tracing` everywhere. Confirmation messages a user would see ("Order
//! Accepted", "Content Removed") are logged as `info!` events by the client
//! that made the change. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic store, client, workflow and search plumbing. Knows nothing about
//! food.
//!
//! ### 2. The Records ([`model`])
//! Record shapes, ids, status enums and their edge tables.
//!
//! ### 3. The Stores ([`order_actor`], [`restaurant_actor`], [`account_actor`],
//! [`moderation_actor`], [`menu_actor`], [`review_actor`])
//! [`ActorEntity`](framework::ActorEntity) implementations: creation rules,
//! actions and their side effects.
//!
//! ### 4. The Interface ([`clients`])
//! Domain-specific clients, one per store, used by every page.
//!
//! ### 5. The Pages' Logic ([`checkout`], [`planner`], [`forms`], [`routes`])
//! Cart pricing, the weekly meal plan, signup validation and the route table.
//!
//! ### 6. The Orchestrator ([`lifecycle`], [`config`], [`seed`])
//! Starting and wiring the stores, loading fixtures, the tracking demo timer.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Walk through a partner and an admin session
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod account_actor;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod forms;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod moderation_actor;
pub mod order_actor;
pub mod planner;
pub mod restaurant_actor;
pub mod review_actor;
pub mod routes;
pub mod seed;
