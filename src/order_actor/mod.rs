//! # Order Actor
//!
//! Owns every [`Order`]. Orders are created fully priced by
//! [`OrderService`](crate::services::OrderService) and afterwards change only
//! through [`OrderAction`]s; they are never removed.

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, OrderClient::new(generic_client))
}
