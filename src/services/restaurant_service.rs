//! # Restaurant Manager
//!
//! Changes to a restaurant follow the restaurant-ownership rule: ADMIN, or the
//! RESTAURANTE account linked to it. Reads are open.

use crate::clients::RestaurantClient;
use crate::error::{DeliveryError, Result};
use crate::model::{require_fee, require_non_blank, Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use crate::security::{guard, Identity};
use resource_actor::ActorClient;
use rust_decimal::Decimal;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct RestaurantService {
    restaurants: RestaurantClient,
}

impl RestaurantService {
    pub fn new(restaurants: RestaurantClient) -> Self {
        Self { restaurants }
    }

    /// Registers an active restaurant. Names are unique.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn register(&self, params: RestaurantCreate) -> Result<Restaurant> {
        require_non_blank("name", &params.name)?;
        require_non_blank("category", &params.category)?;
        require_fee(params.delivery_fee)?;

        let restaurant = self.restaurants.create_restaurant(params).await?;
        info!(restaurant = %restaurant.id, "Restaurant registered");
        Ok(restaurant)
    }

    pub async fn get(&self, id: RestaurantId) -> Result<Restaurant> {
        self.restaurants.require(id).await
    }

    /// A new delivery fee applies to orders placed from now on.
    #[instrument(skip(self, identity))]
    pub async fn update(&self, id: RestaurantId, changes: RestaurantUpdate, identity: &Identity) -> Result<Restaurant> {
        if let Some(name) = &changes.name {
            require_non_blank("name", name)?;
        }
        if let Some(category) = &changes.category {
            require_non_blank("category", category)?;
        }
        if let Some(fee) = changes.delivery_fee {
            require_fee(fee)?;
        }

        self.restaurants.require(id).await?;
        guard::ensure_restaurant_owner(identity, id)?;
        self.restaurants.update_restaurant(id, changes).await
    }

    #[instrument(skip(self, identity))]
    pub async fn toggle_active(&self, id: RestaurantId, identity: &Identity) -> Result<Restaurant> {
        self.restaurants.require(id).await?;
        guard::ensure_restaurant_owner(identity, id)?;
        self.restaurants.toggle_active(id).await
    }

    /// Fails with `Business` when the restaurant is already inactive.
    #[instrument(skip(self, identity))]
    pub async fn deactivate(&self, id: RestaurantId, identity: &Identity) -> Result<Restaurant> {
        self.restaurants.require(id).await?;
        guard::ensure_restaurant_owner(identity, id)?;

        let restaurant = self.restaurants.deactivate(id).await?;
        info!(restaurant = %id, "Restaurant deactivated");
        Ok(restaurant)
    }

    /// `NotFound` when no restaurant has this name or it is inactive.
    pub async fn find_active_by_name(&self, name: &str) -> Result<Restaurant> {
        self.restaurants
            .find_by_name(name)
            .await?
            .filter(|r| r.active)
            .ok_or_else(|| DeliveryError::NotFound(format!("active restaurant named {name}")))
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Restaurant>> {
        self.restaurants.list_by_category(category).await
    }

    /// Restaurants charging at most `max` for delivery.
    pub async fn list_by_max_delivery_fee(&self, max: Decimal) -> Result<Vec<Restaurant>> {
        require_fee(max)?;
        self.restaurants.list_by_max_delivery_fee(max).await
    }

    pub async fn list_active(&self) -> Result<Vec<Restaurant>> {
        self.restaurants.list_active().await
    }
}
