//! Customer-side checkout.

pub mod cart;

pub use cart::*;
