//! [`ActorEntity`] implementation for [`Restaurant`].

use super::actions::RestaurantAction;
use crate::error::DeliveryError;
use crate::model::{require_fee, require_non_blank, Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = RestaurantAction;
    type ActionResult = Restaurant;
    type Context = ();
    type Error = DeliveryError;

    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name.trim().to_string(),
            category: params.category.trim().to_string(),
            phone: params.phone,
            address: params.address,
            rating: params.rating,
            delivery_fee: params.delivery_fee,
            active: true,
        })
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        require_non_blank("name", &self.name)?;
        require_non_blank("category", &self.category)?;
        require_fee(self.delivery_fee)
    }

    /// Fee changes only affect orders placed afterwards.
    async fn on_update(&mut self, update: RestaurantUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            require_non_blank("name", &name)?;
            self.name = name.trim().to_string();
        }
        if let Some(category) = update.category {
            require_non_blank("category", &category)?;
            self.category = category.trim().to_string();
        }
        if let Some(fee) = update.delivery_fee {
            require_fee(fee)?;
            self.delivery_fee = fee;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        if let Some(rating) = update.rating {
            self.rating = Some(rating);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: RestaurantAction, _ctx: &()) -> Result<Restaurant, Self::Error> {
        match action {
            RestaurantAction::ToggleActive => self.active = !self.active,
            RestaurantAction::Deactivate => {
                if !self.active {
                    return Err(DeliveryError::Business(format!(
                        "restaurant {} is already inactive",
                        self.name
                    )));
                }
                self.active = false;
            }
        }
        Ok(self.clone())
    }

    fn conflicts_with(&self, other: &Self) -> Option<String> {
        self.name
            .eq_ignore_ascii_case(&other.name)
            .then(|| format!("restaurant {} already registered", self.name))
    }
}
