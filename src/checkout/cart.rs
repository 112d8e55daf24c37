//! The customer cart: line items, price breakdown and macro totals, and the
//! hand-off to the order store at checkout.

use crate::model::{LineItem, Macros, MenuItem, MenuItemId, OrderCreate, PaymentMethod};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Your cart is empty")]
    Empty,

    #[error("{0} is currently unavailable")]
    Unavailable(String),

    /// A cart holds dishes from a single restaurant.
    #[error("Cart already holds items from {current}, cannot add from {requested}")]
    MixedRestaurants { current: String, requested: String },

    #[error("Checkout validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfilmentMode {
    #[default]
    Delivery,
    Pickup,
}

/// Fee and tax rules applied to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    /// Flat fee for delivery orders, in rupees.
    pub delivery_fee: u32,
    /// Whole percent of the subtotal.
    pub tax_percent: u32,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            delivery_fee: 99,
            tax_percent: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: MenuItemId,
    pub name: String,
    pub restaurant: String,
    pub price: u32,
    pub quantity: u32,
    /// Per serving.
    pub calories: u32,
    /// Per serving.
    pub macros: Macros,
}

/// Who the order is for and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    pub mode: FulfilmentMode,
    pricing: Pricing,
}

impl Cart {
    pub fn new(pricing: Pricing) -> Self {
        Self {
            items: Vec::new(),
            mode: FulfilmentMode::Delivery,
            pricing,
        }
    }

    /// A cart pre-filled with `items`, e.g. restored from a previous visit.
    pub fn with_items(pricing: Pricing, items: Vec<CartItem>) -> Self {
        Self {
            items,
            mode: FulfilmentMode::Delivery,
            pricing,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one serving of `dish` from `restaurant`.
    pub fn add(&mut self, dish: &MenuItem, restaurant: &str) -> Result<(), CartError> {
        if dish.availability == crate::model::Availability::Unavailable {
            return Err(CartError::Unavailable(dish.name.clone()));
        }
        if let Some(current) = self.items.first().map(|item| &item.restaurant) {
            if current != restaurant {
                return Err(CartError::MixedRestaurants {
                    current: current.clone(),
                    requested: restaurant.to_string(),
                });
            }
        }

        match self.items.iter_mut().find(|item| item.id == dish.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem {
                id: dish.id,
                name: dish.name.clone(),
                restaurant: restaurant.to_string(),
                price: dish.price,
                quantity: 1,
                calories: dish.calories,
                macros: dish.macros,
            }),
        }
        info!(item = %dish.name, "Added to cart!");
        Ok(())
    }

    /// Changes a line's quantity by `delta`, never below zero.
    /// Lines that reach zero leave the cart. Returns the new quantity.
    pub fn update_quantity(&mut self, id: MenuItemId, delta: i32) -> Option<u32> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        let quantity = (i64::from(item.quantity) + i64::from(delta)).max(0);
        item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let quantity = item.quantity;
        self.items.retain(|item| item.quantity > 0);
        Some(quantity)
    }

    pub fn remove(&mut self, id: MenuItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() < before;
        if removed {
            info!(%id, "Item removed from cart");
        }
        removed
    }

    pub fn subtotal(&self) -> u64 {
        self.items.iter().fold(0, |sum: u64, item| {
            sum.saturating_add(u64::from(item.price) * u64::from(item.quantity))
        })
    }

    pub fn delivery_fee(&self) -> u32 {
        match self.mode {
            FulfilmentMode::Delivery => self.pricing.delivery_fee,
            FulfilmentMode::Pickup => 0,
        }
    }

    /// Tax on the subtotal, rounded half up to whole rupees.
    pub fn tax(&self) -> u64 {
        self.subtotal()
            .saturating_mul(u64::from(self.pricing.tax_percent))
            .saturating_add(50)
            / 100
    }

    pub fn total(&self) -> u64 {
        self.subtotal()
            .saturating_add(u64::from(self.delivery_fee()))
            .saturating_add(self.tax())
    }

    pub fn total_calories(&self) -> u32 {
        self.items.iter().fold(0, |sum: u32, item| {
            sum.saturating_add(item.calories.saturating_mul(item.quantity))
        })
    }

    pub fn total_macros(&self) -> Macros {
        self.items
            .iter()
            .map(|item| item.macros.scaled(item.quantity))
            .fold(Macros::default(), |acc, m| acc + m)
    }

    /// Turns the cart into an order for the order store. The cart is left as is;
    /// clear it once the order has been placed.
    pub fn checkout(
        &self,
        customer: &CustomerDetails,
        payment_method: PaymentMethod,
        notes: Option<String>,
    ) -> Result<OrderCreate, CartError> {
        let first = self.items.first().ok_or(CartError::Empty)?;
        if customer.name.trim().is_empty() {
            return Err(CartError::ValidationError("customer name is required".into()));
        }
        let delivery_address = match self.mode {
            FulfilmentMode::Delivery if customer.address.trim().is_empty() => {
                return Err(CartError::ValidationError(
                    "a delivery address is required".into(),
                ));
            }
            FulfilmentMode::Delivery => customer.address.clone(),
            FulfilmentMode::Pickup => "Pickup".to_string(),
        };
        // Order totals are stored in whole rupees as u32.
        let too_large = |_: std::num::TryFromIntError| {
            CartError::ValidationError("order total is too large".into())
        };
        u32::try_from(self.total()).map_err(too_large)?;
        let charges = u32::try_from(u64::from(self.delivery_fee()).saturating_add(self.tax()))
            .map_err(too_large)?;

        Ok(OrderCreate {
            customer_name: customer.name.clone(),
            customer_phone: customer.phone.clone(),
            delivery_address,
            restaurant: first.restaurant.clone(),
            items: self
                .items
                .iter()
                .map(|item| LineItem::new(item.name.clone(), item.quantity, item.price))
                .collect(),
            charges,
            payment_method,
            notes: notes.filter(|notes| !notes.trim().is_empty()),
        })
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Availability, Category};

    fn biryani_cart() -> Cart {
        Cart::with_items(
            Pricing::default(),
            vec![
                CartItem {
                    id: MenuItemId(3),
                    name: "Chicken Biryani".into(),
                    restaurant: "Karachi Biryani House".into(),
                    price: 350,
                    quantity: 2,
                    calories: 650,
                    macros: Macros::new(35, 75, 22),
                },
                CartItem {
                    id: MenuItemId(2),
                    name: "Seekh Kebab".into(),
                    restaurant: "Karachi Biryani House".into(),
                    price: 280,
                    quantity: 1,
                    calories: 320,
                    macros: Macros::new(28, 8, 18),
                },
            ],
        )
    }

    fn customer() -> CustomerDetails {
        CustomerDetails {
            name: "Ahmed Khan".into(),
            phone: "+92 300 1234567".into(),
            address: "House #123, Street 5, DHA Phase 6, Karachi".into(),
        }
    }

    #[test]
    fn price_breakdown_for_delivery() {
        let cart = biryani_cart();
        assert_eq!(cart.subtotal(), 980);
        assert_eq!(cart.delivery_fee(), 99);
        assert_eq!(cart.tax(), 49);
        assert_eq!(cart.total(), 1128);
    }

    #[test]
    fn pickup_is_free_of_delivery_fee() {
        let mut cart = biryani_cart();
        cart.mode = FulfilmentMode::Pickup;
        assert_eq!(cart.total(), 980 + 49);
    }

    #[test]
    fn tax_rounds_half_up() {
        let mut cart = biryani_cart();
        cart.clear();
        cart.items.push(CartItem {
            id: MenuItemId(1),
            name: "Raita".into(),
            restaurant: "Karachi Biryani House".into(),
            price: 50,
            quantity: 1,
            calories: 80,
            macros: Macros::new(4, 6, 5),
        });
        // 5% of 50 is 2.5
        assert_eq!(cart.tax(), 3);
    }

    #[test]
    fn macro_totals_scale_with_quantity() {
        let cart = biryani_cart();
        assert_eq!(cart.total_calories(), 1620);
        assert_eq!(cart.total_macros(), Macros::new(98, 158, 62));
    }

    #[test]
    fn quantity_never_goes_negative_and_empty_lines_drop() {
        let mut cart = biryani_cart();
        assert_eq!(cart.update_quantity(MenuItemId(3), 1), Some(3));
        assert_eq!(cart.update_quantity(MenuItemId(2), -5), Some(0));
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.update_quantity(MenuItemId(2), 1), None);
    }

    #[test]
    fn checkout_builds_the_order() {
        let cart = biryani_cart();
        let order = cart
            .checkout(&customer(), PaymentMethod::CashOnDelivery, Some("  ".into()))
            .unwrap();
        assert_eq!(order.restaurant, "Karachi Biryani House");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.charges, 99 + 49);
        assert_eq!(order.notes, None);
    }

    #[test]
    fn oversized_carts_cannot_check_out() {
        let mut cart = biryani_cart();
        assert_eq!(cart.update_quantity(MenuItemId(3), i32::MAX), Some(2 + i32::MAX as u32));
        assert!(cart.total() > u64::from(u32::MAX));
        assert_eq!(
            cart.checkout(&customer(), PaymentMethod::Card, None),
            Err(CartError::ValidationError("order total is too large".into()))
        );
        assert_eq!(cart.total_calories(), u32::MAX);
    }

    #[test]
    fn empty_cart_cannot_check_out() {
        let cart = Cart::new(Pricing::default());
        assert_eq!(
            cart.checkout(&customer(), PaymentMethod::Card, None),
            Err(CartError::Empty)
        );
    }

    #[test]
    fn adding_from_another_restaurant_is_refused() {
        let mut cart = biryani_cart();
        let salad = MenuItem {
            id: MenuItemId(9),
            name: "Grilled Salad".into(),
            description: String::new(),
            price: 450,
            calories: 300,
            macros: Macros::new(20, 15, 12),
            category: Category::MainCourse,
            tags: vec![],
            allergens: vec![],
            prep_minutes: 10,
            availability: Availability::Available,
        };
        assert!(matches!(
            cart.add(&salad, "Healthy Bites"),
            Err(CartError::MixedRestaurants { .. })
        ));

        cart.add(&salad, "Karachi Biryani House").unwrap();
        cart.add(&salad, "Karachi Biryani House").unwrap();
        assert_eq!(cart.update_quantity(MenuItemId(9), 0), Some(2));
    }
}
