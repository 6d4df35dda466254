//! # Delivery
//!
//! > **A food-delivery backend built from resource-oriented actors.**
//!
//! Customers order from restaurants; restaurants run their catalogue; administrators
//! see everything. Every entity lives in its own Tokio actor from the
//! [`resource_actor`] crate, and managers in [`services`] put validation, pricing and
//! authorization in front of those actors.
//!
//! ## 🏗️ Design
//!
//! ### One actor per entity
//! `ResourceActor<T>` owns the records of one entity type and processes requests
//! sequentially. Each request runs against a working copy that is committed only if
//! every check passed, so a rejected create or update leaves the store untouched.
//! Uniqueness (customer e-mail, restaurant name, order number, user e-mail) is
//! enforced inside the actor, where no two requests can race.
//!
//! ### Prices are computed, never trusted
//! Callers send product ids and quantities. [`PricingCalculator`](services::PricingCalculator)
//! snapshots name and unit price into each line; the order total is
//! `subtotal + restaurant.delivery_fee`, all in [`rust_decimal::Decimal`].
//!
//! ### Explicit identity
//! Every caller-facing operation takes an [`Identity`](security::Identity). The
//! [`guard`](security::guard) functions decide, and a refusal is
//! [`DeliveryError::AccessDenied`].
//!
//! ### One error type
//! Validation, business-rule, lookup, authorization and store failures are all
//! [`DeliveryError`] variants, including the ones raised inside actor hooks.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: records, ids and the order status graph.
//! - [`customer_actor`], [`restaurant_actor`], [`product_actor`], [`order_actor`],
//!   [`user_actor`]: the `ActorEntity` implementations.
//! - [`clients`]: typed wrappers around each actor's `ResourceClient`.
//! - [`services`]: the managers a transport layer calls.
//! - [`security`]: caller identity and the authorization guard.
//! - [`lifecycle`]: [`DeliverySystem`](lifecycle::DeliverySystem) wiring and tracing setup.
//! - [`config`]: runtime settings read from the environment.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod restaurant_actor;
pub mod security;
pub mod services;
pub mod user_actor;

pub use error::{DeliveryError, Result};
