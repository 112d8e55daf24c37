//! Represents a customer order as seen by the partner and admin portals.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
//! - Creation parameters ([`OrderCreate`])
//! - Update parameters ([`OrderUpdate`])
//! - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))

use crate::framework::Searchable;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;

/// Type-safe identifier for Orders, rendered as `ORD-001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ORD-{:03}", self.0)
    }
}

crate::status_enum! {
    /// Where an order is in the kitchen-to-door pipeline.
    ///
    /// `Ready` may complete directly for pickup orders.
    pub enum OrderStatus {
        New = "new" => [Accepted, Rejected, Cancelled],
        Accepted = "accepted" => [Preparing, Cancelled],
        Preparing = "preparing" => [Ready],
        Ready = "ready" => [OutForDelivery, Completed],
        OutForDelivery = "out_for_delivery" => [Completed],
        Completed = "completed" => [],
        Rejected = "rejected" => [],
        Cancelled = "cancelled" => [],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "COD")]
    CashOnDelivery,
    #[serde(rename = "Card")]
    Card,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::CashOnDelivery => f.write_str("COD"),
            PaymentMethod::Card => f.write_str("Card"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Refunded,
}

/// One dish on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    /// Unit price in rupees.
    pub price: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn subtotal(&self) -> u64 {
        u64::from(self.quantity) * u64::from(self.price)
    }
}

/// Estimated preparation window quoted when accepting an order, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eta {
    pub min_minutes: u32,
    pub max_minutes: u32,
}

impl Eta {
    pub fn new(min_minutes: u32, max_minutes: u32) -> Self {
        Self {
            min_minutes,
            max_minutes,
        }
    }

    /// Both bounds positive and `min <= max`.
    pub fn is_valid(&self) -> bool {
        self.min_minutes > 0 && self.min_minutes <= self.max_minutes
    }
}

impl Default for Eta {
    fn default() -> Self {
        Self::new(20, 30)
    }
}

impl Display for Eta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} mins", self.min_minutes, self.max_minutes)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub restaurant: String,
    pub items: Vec<LineItem>,
    /// Amount charged in rupees, fees and tax included.
    pub total: u32,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
    pub placed_at: String,
    pub eta: Option<Eta>,
}

impl Order {
    pub fn items_subtotal(&self) -> u64 {
        self.items
            .iter()
            .fold(0, |sum: u64, item| sum.saturating_add(item.subtotal()))
    }

    /// Line items as the order cards print them: `2x Chicken Biryani, 1x Raita`.
    pub fn items_summary(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{}x {}", item.quantity, item.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.to_string()),
            self.customer_name.as_str().into(),
            self.restaurant.as_str().into(),
        ]
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub restaurant: String,
    pub items: Vec<LineItem>,
    /// Delivery fee plus tax, added on top of the line items.
    pub charges: u32,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

/// Partner-side revisions to an order in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub eta: Option<Eta>,
    pub notes: Option<String>,
}

/// Headline numbers for the admin orders page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OrderStats {
    pub total_orders: usize,
    pub completed: usize,
    pub active: usize,
    /// Sum of totals over paid orders.
    pub revenue: u64,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |mut stats, order| {
            stats.total_orders += 1;
            if order.status == OrderStatus::Completed {
                stats.completed += 1;
            }
            if !crate::framework::Status::is_terminal(order.status) {
                stats.active += 1;
            }
            if order.payment_status == PaymentStatus::Paid {
                stats.revenue += u64::from(order.total);
            }
            stats
        })
    }
}
