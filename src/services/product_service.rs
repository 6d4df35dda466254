//! # Product Manager
//!
//! Catalogue changes follow the restaurant-ownership rule on the product's restaurant.
//! Only ADMIN may move a product to another restaurant.

use crate::clients::{ProductClient, RestaurantClient};
use crate::error::{DeliveryError, Result};
use crate::model::{require_non_blank, require_price, Product, ProductCreate, ProductId, ProductUpdate, RestaurantId};
use crate::security::{guard, Identity};
use resource_actor::ActorClient;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct ProductService {
    products: ProductClient,
    restaurants: RestaurantClient,
}

impl ProductService {
    pub fn new(products: ProductClient, restaurants: RestaurantClient) -> Self {
        Self {
            products,
            restaurants,
        }
    }

    /// Adds a product to a restaurant's catalogue; the restaurant must exist.
    #[instrument(skip(self, identity))]
    pub async fn create(&self, params: ProductCreate, identity: &Identity) -> Result<Product> {
        require_non_blank("name", &params.name)?;
        require_non_blank("category", &params.category)?;
        require_price(params.price)?;
        guard::ensure_restaurant_owner(identity, params.restaurant_id)?;

        let product = self.products.create_product(params).await?;
        info!(product = %product.id, restaurant = %product.restaurant_id, "Product created");
        Ok(product)
    }

    pub async fn get(&self, id: ProductId) -> Result<Product> {
        self.products.require(id).await
    }

    #[instrument(skip(self, identity))]
    pub async fn update(&self, id: ProductId, changes: ProductUpdate, identity: &Identity) -> Result<Product> {
        if let Some(name) = &changes.name {
            require_non_blank("name", name)?;
        }
        if let Some(category) = &changes.category {
            require_non_blank("category", category)?;
        }
        if let Some(price) = changes.price {
            require_price(price)?;
        }

        let product = self.products.require(id).await?;
        guard::ensure_restaurant_owner(identity, product.restaurant_id)?;

        if let Some(target) = changes.restaurant_id {
            if target != product.restaurant_id && !identity.is_admin() {
                warn!(product = %id, %target, "Refusing to move product");
                return Err(DeliveryError::AccessDenied(format!(
                    "{id} cannot be moved to {target} by {}",
                    identity.email()
                )));
            }
        }
        self.products.update_product(id, changes).await
    }

    #[instrument(skip(self, identity))]
    pub async fn toggle_availability(&self, id: ProductId, identity: &Identity) -> Result<Product> {
        let product = self.products.require(id).await?;
        guard::ensure_restaurant_owner(identity, product.restaurant_id)?;
        self.products.toggle_availability(id).await
    }

    /// Available products of an existing restaurant.
    pub async fn list_by_restaurant(&self, restaurant_id: RestaurantId) -> Result<Vec<Product>> {
        self.restaurants.require(restaurant_id).await?;
        let products = self.products.list_by_restaurant(restaurant_id).await?;
        Ok(products.into_iter().filter(|p| p.available).collect())
    }

    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.products.list_by_category(category).await
    }

    /// Products priced within `[min, max]`.
    pub async fn list_by_price_range(&self, min: Decimal, max: Decimal) -> Result<Vec<Product>> {
        if min > max {
            return Err(DeliveryError::Validation(format!(
                "minimum price {min} is above maximum {max}"
            )));
        }
        self.products.list_by_price_range(min, max).await
    }

    pub async fn list_available(&self) -> Result<Vec<Product>> {
        self.products.list_available().await
    }
}
