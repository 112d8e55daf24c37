//! Custom actions for the Order actor.
//!
//! Both actions move the order along its workflow and answer with the updated
//! [`Order`](crate::model::Order).

use crate::model::{Eta, OrderStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Partner accepts a new order and quotes a preparation window.
    Accept { eta: Eta },
    /// Any other step: reject, start preparing, mark ready, dispatch, complete, cancel.
    Transition(OrderStatus),
}
