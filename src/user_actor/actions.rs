//! Custom actions for the User actor.

#[derive(Debug, Clone, Copy)]
pub enum UserAction {
    /// Flips the `active` flag. Inactive accounts cannot act on the system.
    ToggleActive,
}
