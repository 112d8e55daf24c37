//! Canonical record shapes, one per entity, shared by every portal.

pub mod account;
pub mod menu;
pub mod moderation;
pub mod order;
pub mod restaurant;
pub mod review;

pub use account::*;
pub use menu::*;
pub use moderation::*;
pub use order::*;
pub use restaurant::*;
pub use review::*;
