//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each client implements [`ActorClient`](resource_actor::ActorClient) with
//! [`DeliveryError`](crate::error::DeliveryError) as its error type, so store failures
//! surface as domain errors and `get`/`require` come for free.

pub mod customer_client;
pub mod order_client;
pub mod product_client;
pub mod restaurant_client;
pub mod user_client;

pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;
pub use restaurant_client::*;
pub use user_client::*;
