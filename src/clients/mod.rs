//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each wrapper maps framework errors onto its store's error enum and logs
//! the confirmation a user would see after a successful change.

pub mod account_client;
pub mod menu_client;
pub mod moderation_client;
pub mod order_client;
pub mod restaurant_client;
pub mod review_client;

pub use account_client::*;
pub use menu_client::*;
pub use moderation_client::*;
pub use order_client::*;
pub use restaurant_client::*;
pub use review_client::*;
