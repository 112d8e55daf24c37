//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and adds the partner and admin order
//! page operations on top of the generic workflow calls.
use crate::framework::{
    ActorClient, FrameworkError, ListQuery, ResourceClient, StatusFilter, WorkflowClient,
};
use crate::model::{Eta, Order, OrderCreate, OrderId, OrderStats, OrderStatus, OrderUpdate, PaymentMethod};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "place_order called");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Order placed successfully!");
        Ok(id)
    }

    /// Accepts a new order with the quoted preparation window.
    #[instrument(skip(self))]
    pub async fn accept(&self, id: OrderId, eta: Eta) -> Result<Order, OrderError> {
        let order = self
            .inner
            .perform_action(id, OrderAction::Accept { eta })
            .await
            .map_err(Self::map_error)?;
        info!(%id, %eta, "Order Accepted");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, id: OrderId) -> Result<Order, OrderError> {
        let order = self.transition(id, OrderStatus::Rejected).await?;
        info!(%id, "Order Rejected");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: OrderId) -> Result<Order, OrderError> {
        let order = self.transition(id, OrderStatus::Cancelled).await?;
        info!(%id, "Order Cancelled");
        Ok(order)
    }

    /// Moves the order one step along the kitchen pipeline
    /// (accepted → preparing → ready → out for delivery → completed).
    ///
    /// From `ready`, `pickup` completes the order directly.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: OrderId, pickup: bool) -> Result<Order, OrderError> {
        let current = self
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        let next = next_step(current.status, pickup).ok_or_else(|| {
            OrderError::ValidationError(format!("{id} has no next step from {}", current.status))
        })?;
        self.transition(id, next).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        let order = self.inner.update(id, update).await.map_err(Self::map_error)?;
        info!(%id, "Order Updated");
        Ok(order)
    }

    /// Admin orders table: status dropdown, payment dropdown and search box.
    #[instrument(skip(self))]
    pub async fn admin_view(
        &self,
        status: StatusFilter<OrderStatus>,
        payment: Option<PaymentMethod>,
        search: &str,
    ) -> Result<Vec<Order>, OrderError> {
        let mut query = ListQuery::new().status(status).search(search);
        if let Some(method) = payment {
            query = query.with(move |order: &Order| order.payment_method == method);
        }
        self.list(query).await
    }

    pub async fn stats(&self) -> Result<OrderStats, OrderError> {
        let orders = self.list_where(|_| true).await?;
        Ok(OrderStats::from_orders(&orders))
    }
}

/// The step the partner's primary button takes from `status`.
pub fn next_step(status: OrderStatus, pickup: bool) -> Option<OrderStatus> {
    match status {
        OrderStatus::New => Some(OrderStatus::Accepted),
        OrderStatus::Accepted => Some(OrderStatus::Preparing),
        OrderStatus::Preparing => Some(OrderStatus::Ready),
        OrderStatus::Ready if pickup => Some(OrderStatus::Completed),
        OrderStatus::Ready => Some(OrderStatus::OutForDelivery),
        OrderStatus::OutForDelivery => Some(OrderStatus::Completed),
        OrderStatus::Completed | OrderStatus::Rejected | OrderStatus::Cancelled => None,
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error(OrderError::NotFound, OrderError::ActorCommunicationError)
    }
}

impl WorkflowClient<Order> for OrderClient {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Status;

    #[test]
    fn next_step_only_follows_declared_edges() {
        for status in OrderStatus::ALL {
            for pickup in [false, true] {
                if let Some(next) = next_step(*status, pickup) {
                    assert!(status.can_transition_to(next), "{status} -> {next}");
                } else {
                    assert!(status.is_terminal());
                }
            }
        }
    }

    #[test]
    fn pickup_orders_skip_delivery() {
        assert_eq!(
            next_step(OrderStatus::Ready, true),
            Some(OrderStatus::Completed)
        );
        assert_eq!(
            next_step(OrderStatus::Ready, false),
            Some(OrderStatus::OutForDelivery)
        );
    }
}
