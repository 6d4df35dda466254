use super::{ProductId, RestaurantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A menu item offered by exactly one restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    /// Always positive.
    pub price: Decimal,
    pub category: String,
    pub available: bool,
    pub restaurant_id: RestaurantId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
    pub restaurant_id: RestaurantId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    /// Moves the product to another restaurant. Only administrators may do this.
    pub restaurant_id: Option<RestaurantId>,
}
