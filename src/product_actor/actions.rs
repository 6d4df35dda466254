//! Custom actions for the Product actor.
//!
//! These actions are handled by [`ActorEntity::handle_action`](resource_actor::ActorEntity::handle_action)
//! on [`Product`](crate::model::Product).

#[derive(Debug, Clone, Copy)]
pub enum ProductAction {
    /// Flips the `available` flag. Unavailable products cannot be ordered.
    ToggleAvailability,
}
