//! Status changes for the Order actor.
//!
//! Both actions are checked against the order's current status inside the actor,
//! so two concurrent requests for the same order are applied one after the other
//! and the second one sees the first one's result.

use crate::model::OrderStatus;

#[derive(Debug, Clone, Copy)]
pub enum OrderAction {
    /// Moves the order along one edge of the status graph.
    Transition(OrderStatus),
    /// Cancels a PENDING or CONFIRMED order. Cancelling twice is an error.
    Cancel,
}
