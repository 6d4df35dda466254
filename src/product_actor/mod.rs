//! # Product Actor
//!
//! Owns every [`Product`] record.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//! - [`actions`] - [`ProductAction`] for availability
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Context
//!
//! The actor must be started with a [`RestaurantClient`](crate::clients::RestaurantClient):
//!
//! ```rust
//! use delivery::model::{ProductCreate, RestaurantCreate, RestaurantId};
//! use delivery::{product_actor, restaurant_actor};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (restaurant_actor, restaurants) = restaurant_actor::new(8);
//!     let (product_actor, products) = product_actor::new(8);
//!     tokio::spawn(restaurant_actor.run(()));
//!     tokio::spawn(product_actor.run(restaurants.clone()));
//!
//!     restaurants.create_restaurant(RestaurantCreate {
//!         name: "Cantina".into(),
//!         category: "Italiana".into(),
//!         phone: None,
//!         address: None,
//!         rating: None,
//!         delivery_fee: Decimal::new(500, 2),
//!     }).await?;
//!
//!     let pizza = products.create_product(ProductCreate {
//!         name: "Margherita".into(),
//!         description: None,
//!         price: Decimal::new(2000, 2),
//!         category: "Pizza".into(),
//!         restaurant_id: RestaurantId(1),
//!     }).await?;
//!     assert!(pizza.available);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_actor::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, ProductClient::new(generic_client))
}
