//! Caller identity and the ownership guard applied by every manager.

pub mod guard;
pub mod identity;

pub use identity::Identity;
