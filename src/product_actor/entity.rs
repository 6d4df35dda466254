//! [`ActorEntity`] implementation for [`Product`].
//!
//! The actor runs with a [`RestaurantClient`] as context, so a product can only be
//! stored under (or moved to) a restaurant that exists.

use super::actions::ProductAction;
use crate::clients::RestaurantClient;
use crate::error::DeliveryError;
use crate::model::{require_non_blank, require_price, Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity};
use tracing::debug;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = Product;
    type Context = RestaurantClient;
    type Error = DeliveryError;

    /// New products start available.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name.trim().to_string(),
            description: params.description,
            price: params.price,
            category: params.category.trim().to_string(),
            available: true,
            restaurant_id: params.restaurant_id,
        })
    }

    async fn on_create(&mut self, restaurants: &RestaurantClient) -> Result<(), Self::Error> {
        require_non_blank("name", &self.name)?;
        require_non_blank("category", &self.category)?;
        require_price(self.price)?;

        debug!(restaurant_id = %self.restaurant_id, "Checking owning restaurant");
        restaurants.require(self.restaurant_id).await?;
        Ok(())
    }

    async fn on_update(&mut self, update: ProductUpdate, restaurants: &RestaurantClient) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            require_non_blank("name", &name)?;
            self.name = name.trim().to_string();
        }
        if let Some(category) = update.category {
            require_non_blank("category", &category)?;
            self.category = category.trim().to_string();
        }
        if let Some(price) = update.price {
            require_price(price)?;
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(restaurant_id) = update.restaurant_id {
            if restaurant_id != self.restaurant_id {
                restaurants.require(restaurant_id).await?;
                self.restaurant_id = restaurant_id;
            }
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ProductAction, _ctx: &RestaurantClient) -> Result<Product, Self::Error> {
        match action {
            ProductAction::ToggleAvailability => {
                self.available = !self.available;
                Ok(self.clone())
            }
        }
    }
}
