//! ActorEntity trait implementation for the Order domain type.
//!
//! Status changes go through [`StatusTagged::transition`], so an order can
//! only ever move along the declared edges. Payment status follows the order:
//! rejecting or cancelling a paid order refunds it, and handing over a
//! cash-on-delivery order marks it paid.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::framework::{ActorEntity, StatusTagged};
use crate::model::{
    Eta, Order, OrderCreate, OrderId, OrderStatus, OrderUpdate, PaymentMethod, PaymentStatus,
};
use async_trait::async_trait;

impl Order {
    fn settle_payment(&mut self) {
        match (self.status, self.payment_status) {
            (OrderStatus::Rejected | OrderStatus::Cancelled, PaymentStatus::Paid) => {
                self.payment_status = PaymentStatus::Refunded;
            }
            (OrderStatus::Completed, PaymentStatus::Pending)
                if self.payment_method == PaymentMethod::CashOnDelivery =>
            {
                self.payment_status = PaymentStatus::Paid;
            }
            _ => {}
        }
    }

    fn move_to(&mut self, to: OrderStatus) -> Result<(), OrderError> {
        self.transition(to)?;
        self.settle_payment();
        Ok(())
    }
}

fn validate_eta(eta: Eta) -> Result<Eta, OrderError> {
    if eta.is_valid() {
        Ok(eta)
    } else {
        Err(OrderError::InvalidEta {
            min: eta.min_minutes,
            max: eta.max_minutes,
        })
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Places a new order. Card payments are captured up front.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.customer_name.trim().is_empty() {
            return Err(OrderError::ValidationError(
                "customer name is required".into(),
            ));
        }
        if params.items.is_empty() {
            return Err(OrderError::ValidationError(
                "an order needs at least one item".into(),
            ));
        }
        if params.items.iter().any(|item| item.quantity == 0) {
            return Err(OrderError::ValidationError(
                "item quantities must be positive".into(),
            ));
        }

        let payment_status = match params.payment_method {
            PaymentMethod::Card => PaymentStatus::Paid,
            PaymentMethod::CashOnDelivery => PaymentStatus::Pending,
        };
        let items_total = params
            .items
            .iter()
            .fold(0, |sum: u64, item| sum.saturating_add(item.subtotal()));
        let total = u32::try_from(items_total.saturating_add(u64::from(params.charges)))
            .map_err(|_| OrderError::ValidationError("order total is too large".into()))?;

        Ok(Self {
            id,
            customer_name: params.customer_name,
            customer_phone: params.customer_phone,
            delivery_address: params.delivery_address,
            restaurant: params.restaurant,
            items: params.items,
            total,
            status: OrderStatus::New,
            payment_method: params.payment_method,
            payment_status,
            notes: params.notes.filter(|notes| !notes.trim().is_empty()),
            placed_at: "just now".into(),
            eta: None,
        })
    }

    /// Revises the ETA or kitchen notes of an order that is still open.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), OrderError> {
        if crate::framework::Status::is_terminal(self.status) {
            return Err(OrderError::ValidationError(format!(
                "{} is already {}",
                self.id, self.status
            )));
        }
        if let Some(eta) = update.eta {
            self.eta = Some(validate_eta(eta)?);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes).filter(|notes| !notes.trim().is_empty());
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: OrderAction, _ctx: &()) -> Result<Order, OrderError> {
        match action {
            OrderAction::Accept { eta } => {
                let eta = validate_eta(eta)?;
                self.move_to(OrderStatus::Accepted)?;
                self.eta = Some(eta);
            }
            OrderAction::Transition(to) => {
                self.move_to(to)?;
                if to == OrderStatus::Accepted && self.eta.is_none() {
                    self.eta = Some(Eta::default());
                }
            }
        }
        Ok(self.clone())
    }
}

impl StatusTagged for Order {
    type Status = OrderStatus;

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    fn transition_action(to: OrderStatus) -> OrderAction {
        OrderAction::Transition(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::IllegalTransition;
    use crate::model::LineItem;

    fn params(method: PaymentMethod) -> OrderCreate {
        OrderCreate {
            customer_name: "Ahmed Khan".into(),
            customer_phone: "+92 300 1234567".into(),
            delivery_address: "123 Main Street, Gulshan-e-Iqbal, Karachi".into(),
            restaurant: "Karachi Biryani House".into(),
            items: vec![
                LineItem::new("Chicken Biryani", 2, 350),
                LineItem::new("Raita", 1, 50),
            ],
            charges: 0,
            payment_method: method,
            notes: Some("Less spicy please".into()),
        }
    }

    #[test]
    fn card_orders_start_paid_and_cod_orders_pending() {
        let card = Order::from_create_params(OrderId(1), params(PaymentMethod::Card)).unwrap();
        assert_eq!(card.payment_status, PaymentStatus::Paid);
        assert_eq!(card.total, 750);

        let cod =
            Order::from_create_params(OrderId(2), params(PaymentMethod::CashOnDelivery)).unwrap();
        assert_eq!(cod.payment_status, PaymentStatus::Pending);
        assert_eq!(cod.status, OrderStatus::New);
    }

    #[test]
    fn oversized_totals_are_rejected() {
        let mut bulk = params(PaymentMethod::Card);
        bulk.items = vec![LineItem::new("Chicken Biryani", u32::MAX, 350)];
        assert_eq!(
            Order::from_create_params(OrderId(1), bulk),
            Err(OrderError::ValidationError("order total is too large".into()))
        );

        let mut fees = params(PaymentMethod::Card);
        fees.charges = u32::MAX;
        assert!(matches!(
            Order::from_create_params(OrderId(1), fees),
            Err(OrderError::ValidationError(_))
        ));
    }

    #[test]
    fn create_rejects_empty_orders() {
        let mut empty = params(PaymentMethod::Card);
        empty.items.clear();
        assert!(matches!(
            Order::from_create_params(OrderId(1), empty),
            Err(OrderError::ValidationError(_))
        ));

        let mut anonymous = params(PaymentMethod::Card);
        anonymous.customer_name = "  ".into();
        assert!(Order::from_create_params(OrderId(1), anonymous).is_err());
    }

    #[tokio::test]
    async fn accept_records_the_eta() {
        let mut order =
            Order::from_create_params(OrderId(1), params(PaymentMethod::CashOnDelivery)).unwrap();
        let accepted = order
            .handle_action(OrderAction::Accept { eta: Eta::new(15, 25) }, &())
            .await
            .unwrap();
        assert_eq!(accepted.status, OrderStatus::Accepted);
        assert_eq!(accepted.eta, Some(Eta::new(15, 25)));
    }

    #[tokio::test]
    async fn accept_with_inverted_eta_leaves_the_order_new() {
        let mut order =
            Order::from_create_params(OrderId(1), params(PaymentMethod::CashOnDelivery)).unwrap();
        let err = order
            .handle_action(OrderAction::Accept { eta: Eta::new(30, 20) }, &())
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::InvalidEta { min: 30, max: 20 });
        assert_eq!(order.status, OrderStatus::New);
    }

    #[tokio::test]
    async fn skipping_steps_is_rejected() {
        let mut order =
            Order::from_create_params(OrderId(1), params(PaymentMethod::CashOnDelivery)).unwrap();
        let err = order
            .handle_action(OrderAction::Transition(OrderStatus::Ready), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::IllegalTransition(IllegalTransition {
                from: OrderStatus::New,
                to: OrderStatus::Ready
            })
        );
    }

    #[tokio::test]
    async fn rejecting_a_paid_order_refunds_it() {
        let mut order = Order::from_create_params(OrderId(1), params(PaymentMethod::Card)).unwrap();
        let rejected = order
            .handle_action(OrderAction::Transition(OrderStatus::Rejected), &())
            .await
            .unwrap();
        assert_eq!(rejected.payment_status, PaymentStatus::Refunded);
    }

    #[tokio::test]
    async fn completing_cod_collects_payment() {
        let mut order =
            Order::from_create_params(OrderId(1), params(PaymentMethod::CashOnDelivery)).unwrap();
        for step in [
            OrderStatus::Accepted,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::OutForDelivery,
        ] {
            order
                .handle_action(OrderAction::Transition(step), &())
                .await
                .unwrap();
            assert_eq!(order.payment_status, PaymentStatus::Pending);
        }
        assert_eq!(order.eta, Some(Eta::default()));

        let done = order
            .handle_action(OrderAction::Transition(OrderStatus::Completed), &())
            .await
            .unwrap();
        assert_eq!(done.payment_status, PaymentStatus::Paid);
    }

    #[tokio::test]
    async fn closed_orders_cannot_be_edited() {
        let mut order =
            Order::from_create_params(OrderId(1), params(PaymentMethod::CashOnDelivery)).unwrap();
        order
            .handle_action(OrderAction::Transition(OrderStatus::Cancelled), &())
            .await
            .unwrap();
        let update = OrderUpdate {
            notes: Some("extra raita".into()),
            ..Default::default()
        };
        assert!(order.on_update(update, &()).await.is_err());
    }
}
