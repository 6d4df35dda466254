//! # User Actor
//!
//! Owns every [`User`] account; e-mails are unique. Runs with a
//! [`RestaurantClient`](crate::clients::RestaurantClient) as context so that a
//! RESTAURANTE account can only be linked to an existing restaurant.

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::clients::UserClient;
use crate::model::User;
use resource_actor::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, UserClient::new(generic_client))
}
