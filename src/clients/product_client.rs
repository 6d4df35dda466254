//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
use crate::error::{DeliveryError, Result};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, RestaurantId};
use crate::product_actor::ProductAction;
use async_trait::async_trait;
use resource_actor::{ActorClient, ResourceClient};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: ProductId, update: ProductUpdate) -> Result<Product> {
        Ok(self.inner.update(id, update).await?)
    }

    /// Flips availability and returns the product as stored afterwards.
    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: ProductId) -> Result<Product> {
        Ok(self
            .inner
            .perform_action(id, ProductAction::ToggleAvailability)
            .await?)
    }

    /// Every product of a restaurant, available or not.
    pub async fn list_by_restaurant(&self, restaurant_id: RestaurantId) -> Result<Vec<Product>> {
        self.list_where("restaurant", move |p: &Product| p.restaurant_id == restaurant_id)
            .await
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>> {
        let category = category.trim().to_string();
        self.list_where("category", move |p: &Product| {
            p.category.eq_ignore_ascii_case(&category)
        })
        .await
    }

    /// Products priced within `[min, max]`.
    pub async fn list_by_price_range(&self, min: Decimal, max: Decimal) -> Result<Vec<Product>> {
        self.list_where("price range", move |p: &Product| p.price >= min && p.price <= max)
            .await
    }

    pub async fn list_available(&self) -> Result<Vec<Product>> {
        self.list_where("available", |p: &Product| p.available).await
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = DeliveryError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }
}
