//! # User Client
//!
//! Provides a high-level API for interacting with the `User` actor.
use crate::error::{DeliveryError, Result};
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserAction;
use async_trait::async_trait;
use resource_actor::{ActorClient, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(email = %params.email))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self, update))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User> {
        Ok(self.inner.update(id, update).await?)
    }

    #[instrument(skip(self))]
    pub async fn toggle_active(&self, id: UserId) -> Result<User> {
        Ok(self.inner.perform_action(id, UserAction::ToggleActive).await?)
    }

    /// Case-insensitive lookup by e-mail.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let wanted = email.trim().to_string();
        let mut found = self
            .list_where("email", move |u: &User| u.email.eq_ignore_ascii_case(&wanted))
            .await?;
        Ok(found.pop())
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = DeliveryError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }
}
