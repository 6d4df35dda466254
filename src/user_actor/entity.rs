//! [`ActorEntity`] implementation for [`User`].

use super::actions::UserAction;
use crate::clients::RestaurantClient;
use crate::error::DeliveryError;
use crate::model::{require_email, require_non_blank, Role, User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::{ActorClient, ActorEntity};

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = User;
    type Context = RestaurantClient;
    type Error = DeliveryError;

    /// Role defaults to CLIENTE. A restaurant link is only kept for RESTAURANTE accounts.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        let role = params.role.unwrap_or_default();
        let restaurant_id = match role {
            Role::Restaurante => params.restaurant_id,
            Role::Admin | Role::Cliente => None,
        };
        Ok(Self {
            id,
            email: params.email.trim().to_string(),
            password_hash: params.password_hash,
            name: params.name.trim().to_string(),
            role,
            restaurant_id,
            active: true,
            created_at: Utc::now(),
        })
    }

    async fn on_create(&mut self, restaurants: &RestaurantClient) -> Result<(), Self::Error> {
        require_email(&self.email)?;
        require_non_blank("name", &self.name)?;
        require_non_blank("password hash", &self.password_hash)?;

        if self.role == Role::Restaurante {
            let restaurant_id = self.restaurant_id.ok_or_else(|| {
                DeliveryError::Validation("a RESTAURANTE account needs a restaurant".to_string())
            })?;
            restaurants.require(restaurant_id).await?;
        }
        Ok(())
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &RestaurantClient) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            require_non_blank("name", &name)?;
            self.name = name.trim().to_string();
        }
        if let Some(hash) = update.password_hash {
            require_non_blank("password hash", &hash)?;
            self.password_hash = hash;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: UserAction, _ctx: &RestaurantClient) -> Result<User, Self::Error> {
        match action {
            UserAction::ToggleActive => {
                self.active = !self.active;
                Ok(self.clone())
            }
        }
    }

    fn conflicts_with(&self, other: &Self) -> Option<String> {
        self.email
            .eq_ignore_ascii_case(&other.email)
            .then(|| format!("email {} already registered", self.email))
    }
}
