//! # Restaurant Actor
//!
//! Owns every [`Restaurant`] record; names are unique. No dependencies (`Context = ()`),
//! but its client is injected into the Product and User actors so they can verify
//! that a referenced restaurant exists.

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::clients::RestaurantClient;
use crate::model::Restaurant;
use resource_actor::ResourceActor;

/// Creates a new Restaurant actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, RestaurantClient::new(generic_client))
}
