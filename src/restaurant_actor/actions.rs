use crate::model::RestaurantStatus;

/// Admin decisions on a partner application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestaurantAction {
    Transition(RestaurantStatus),
}
