use super::{RestaurantId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role stored on a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Restaurante,
    #[default]
    Cliente,
}

/// An account that can act on the system.
///
/// Passwords are hashed elsewhere; only the opaque hash is kept here.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Unique across users, compared case-insensitively.
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    /// Only meaningful for [`Role::Restaurante`].
    pub restaurant_id: Option<RestaurantId>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for registering a user. `role` defaults to [`Role::Cliente`].
#[derive(Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<Role>,
    pub restaurant_id: Option<RestaurantId>,
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub password_hash: Option<String>,
}

const REDACTED: &str = "<redacted>";

// Password hashes never reach the logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &REDACTED)
            .field("name", &self.name)
            .field("role", &self.role)
            .field("restaurant_id", &self.restaurant_id)
            .field("active", &self.active)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreate")
            .field("email", &self.email)
            .field("password_hash", &REDACTED)
            .field("name", &self.name)
            .field("role", &self.role)
            .field("restaurant_id", &self.restaurant_id)
            .finish()
    }
}

impl fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdate")
            .field("name", &self.name)
            .field("password_hash", &self.password_hash.as_ref().map(|_| REDACTED))
            .finish()
    }
}
