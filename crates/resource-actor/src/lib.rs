//! # Resource Actor
//!
//! An actor-owned record store built on Tokio. Each entity type gets one
//! [`ResourceActor`] that owns every record of that type and processes requests
//! sequentially; the rest of the application talks to it through a cloneable
//! [`ResourceClient`].
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record, its payloads and its hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and storage
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe requests
//!
//! ## Guarantees
//!
//! - **Sequential per type**: one message at a time per actor, so a read-check-write
//!   inside a hook cannot interleave with another writer.
//! - **All-or-nothing writes**: hooks run against a working copy that is committed only
//!   when the hook succeeds and [`ActorEntity::conflicts_with`] finds no clash.
//! - **No physical deletes**: records are deactivated through actions instead.
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Venue { id: u32, name: String }
//!
//! #[derive(Debug)] struct VenueCreate { name: String }
//! #[derive(Debug)] struct VenueUpdate { name: Option<String> }
//! #[derive(Debug)] enum VenueAction {}
//! #[derive(Debug, thiserror::Error)] #[error("venue error")] struct VenueError;
//!
//! #[async_trait]
//! impl ActorEntity for Venue {
//!     type Id = u32;
//!     type Create = VenueCreate;
//!     type Update = VenueUpdate;
//!     type Action = VenueAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = VenueError;
//!
//!     fn from_create_params(id: u32, params: VenueCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     async fn on_update(&mut self, update: VenueUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: VenueAction, _ctx: &()) -> Result<(), Self::Error> {
//!         match action {}
//!     }
//!
//!     fn conflicts_with(&self, other: &Self) -> Option<String> {
//!         (self.name == other.name).then(|| format!("venue {} exists", self.name))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Venue>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let venue = client.create(VenueCreate { name: "Hall".into() }).await.unwrap();
//!     assert_eq!(venue.id, 1);
//!     assert!(client.create(VenueCreate { name: "Hall".into() }).await.is_err());
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction
//! time, so an actor can hold clients of actors created after it.
//!
//! ## Testing
//!
//! See the [`mock`] module for `MockClient` and the channel-level helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Query, ResourceRequest, Response};
