//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the actors behind the managers.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created first and receive their dependencies when spawned through
//! `run(context)`. The Product and User actors get a `RestaurantClient`; the others run
//! with `()`:
//!
//! ```rust,ignore
//! impl ActorEntity for Product {
//!     type Context = RestaurantClient;
//! }
//!
//! impl ActorEntity for Order {
//!     type Context = ();
//! }
//! ```
//!
//! The dependency graph is acyclic, so dropping every client is enough to stop the
//! system: each actor exits when its own channel closes, and the Restaurant actor
//! follows once the actors holding its client are gone.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging; see the [`tracing`] module.

pub mod delivery_system;
pub mod tracing;

pub use delivery_system::*;
pub use self::tracing::*;
