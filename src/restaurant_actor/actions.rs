//! Custom actions for the Restaurant actor.

#[derive(Debug, Clone, Copy)]
pub enum RestaurantAction {
    /// Flips the `active` flag.
    ToggleActive,
    /// Sets `active = false`; fails if the restaurant is already inactive.
    Deactivate,
}
