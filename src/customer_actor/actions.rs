//! Custom actions for the Customer actor.

/// Operations on a [`Customer`](crate::model::Customer) beyond create and update.
#[derive(Debug, Clone, Copy)]
pub enum CustomerAction {
    /// Flips the `active` flag. Customers are never removed.
    ToggleActive,
}
