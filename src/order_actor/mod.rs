//! # Order Actor
//!
//! Owns the single order collection that the partner dashboard, the partner
//! orders page and the admin orders page all read from.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] for accepting and advancing orders
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use nutri_order::order_actor;
//! use nutri_order::clients::OrderClient;
//! use nutri_order::model::{Eta, LineItem, OrderCreate, OrderStatus, PaymentMethod};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = order_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .place_order(OrderCreate {
//!             customer_name: "Sara Ali".into(),
//!             customer_phone: "+92 321 9876543".into(),
//!             delivery_address: "Block 5, PECHS, Karachi".into(),
//!             restaurant: "Karachi Biryani House".into(),
//!             items: vec![LineItem::new("Seekh Kebab", 4, 280)],
//!             charges: 0,
//!             payment_method: PaymentMethod::Card,
//!             notes: None,
//!         })
//!         .await?;
//!
//!     let order = client.accept(id, Eta::new(20, 30)).await?;
//!     assert_eq!(order.status, OrderStatus::Accepted);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
