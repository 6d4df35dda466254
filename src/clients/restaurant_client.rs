//! # Restaurant Client
//!
//! Provides a high-level API for interacting with the `Restaurant` actor.
use crate::error::{DeliveryError, Result};
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use crate::restaurant_actor::RestaurantAction;
use async_trait::async_trait;
use resource_actor::{ActorClient, Query, ResourceClient};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_restaurant(&self, params: RestaurantCreate) -> Result<Restaurant> {
        debug!(?params, "Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_restaurant(&self, id: RestaurantId, update: RestaurantUpdate) -> Result<Restaurant> {
        Ok(self.inner.update(id, update).await?)
    }

    #[instrument(skip(self))]
    pub async fn toggle_active(&self, id: RestaurantId) -> Result<Restaurant> {
        Ok(self.inner.perform_action(id, RestaurantAction::ToggleActive).await?)
    }

    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: RestaurantId) -> Result<Restaurant> {
        Ok(self.inner.perform_action(id, RestaurantAction::Deactivate).await?)
    }

    /// Exact name match, ignoring case.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Restaurant>> {
        let wanted = name.trim().to_string();
        let mut found = self
            .list_where("name", move |r: &Restaurant| r.name.eq_ignore_ascii_case(&wanted))
            .await?;
        Ok(found.pop())
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Restaurant>> {
        let category = category.trim().to_string();
        self.list_where("category", move |r: &Restaurant| {
            r.category.eq_ignore_ascii_case(&category)
        })
        .await
    }

    pub async fn list_by_max_delivery_fee(&self, max: Decimal) -> Result<Vec<Restaurant>> {
        self.list_where("delivery fee", move |r: &Restaurant| r.delivery_fee <= max)
            .await
    }

    pub async fn list_active(&self) -> Result<Vec<Restaurant>> {
        self.list_where("active", |r: &Restaurant| r.active).await
    }

    pub async fn list_all(&self) -> Result<Vec<Restaurant>> {
        Ok(self.inner.list(Query::all()).await?)
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = DeliveryError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }
}
