//! # User Manager
//!
//! Account registration and identity resolution. [`UserService::identify`] is how a
//! transport turns an authenticated e-mail into the [`Identity`] passed to every
//! other manager.

use crate::clients::UserClient;
use crate::error::{DeliveryError, Result};
use crate::model::{require_email, require_non_blank, User, UserCreate, UserId, UserUpdate};
use crate::security::{guard, Identity};
use resource_actor::ActorClient;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct UserService {
    users: UserClient,
}

impl UserService {
    pub fn new(users: UserClient) -> Self {
        Self { users }
    }

    /// Registers an active account. A duplicate e-mail is a `Business` error.
    #[instrument(skip(self, params), fields(email = %params.email))]
    pub async fn register(&self, params: UserCreate) -> Result<User> {
        require_email(&params.email)?;
        require_non_blank("name", &params.name)?;
        require_non_blank("password hash", &params.password_hash)?;

        let user = self.users.create_user(params).await?;
        info!(user = %user.id, role = ?user.role, "User registered");
        Ok(user)
    }

    /// Resolves the caller identity of an active account.
    #[instrument(skip(self))]
    pub async fn identify(&self, email: &str) -> Result<Identity> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DeliveryError::NotFound(format!("user with email {email}")))?;
        let identity = Identity::try_from(&user)?;
        debug!(role = ?identity.role(), "Identity resolved");
        Ok(identity)
    }

    #[instrument(skip(self, changes, identity))]
    pub async fn update_profile(&self, id: UserId, changes: UserUpdate, identity: &Identity) -> Result<User> {
        let user = self.users.require(id).await?;
        guard::ensure_self_or_admin(identity, &user.email)?;
        self.users.update_user(id, changes).await
    }

    /// Administrators only.
    #[instrument(skip(self, identity))]
    pub async fn toggle_active(&self, id: UserId, identity: &Identity) -> Result<User> {
        guard::ensure_admin(identity)?;
        self.users.toggle_active(id).await
    }
}
