//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored record (Customer, Restaurant,
//! Product, Order, User) implements to be owned by a [`ResourceActor`](crate::ResourceActor).
//! It names the id, the creation and update payloads, the custom actions, the injected
//! context and the error type, and it provides the lifecycle hooks the actor calls.
//!
//! # Hooks run on a working copy
//! The actor never hands the stored value to a hook. `on_update` and `handle_action`
//! receive a clone; the clone is written back only when the hook succeeds and
//! [`ActorEntity::conflicts_with`] reports no clash with any other stored entity.
//! A failing hook therefore leaves the store exactly as it was.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier generated by the actor from a monotonically increasing `u32`.
    /// `Ord` keeps listings in creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new record.
    type Create: Send + Sync + Debug;

    /// Payload applied by [`ActorEntity::on_update`].
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `ToggleActive`, `Transition`).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at `run()`. Use `()` when none are needed.
    type Context: Send + Sync;

    /// Error raised by the hooks. It travels boxed inside
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) and can be
    /// downcast back by the caller.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the record from its generated id and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Validation or lookups that must pass before the record is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Uniqueness constraint against another stored record.
    ///
    /// Returns a description of the clash (e.g. `"email a@b.c already registered"`)
    /// when `self` may not coexist with `other`. Checked on create, update and action.
    fn conflicts_with(&self, _other: &Self) -> Option<String> {
        None
    }
}
