//! Customer-side meal planning.

pub mod meal_plan;

pub use meal_plan::*;
