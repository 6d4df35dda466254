//! # Customer Actor
//!
//! Owns every [`Customer`] record. No dependencies (`Context = ()`).
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation, e-mail uniqueness
//! - [`actions`] - [`CustomerAction::ToggleActive`] (soft delete)

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use resource_actor::ResourceActor;

/// Creates a new Customer actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, CustomerClient::new(generic_client))
}
