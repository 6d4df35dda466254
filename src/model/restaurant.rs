use super::RestaurantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A restaurant and the delivery fee it charges.
///
/// The fee is copied onto each order when the order is placed, so changing it
/// never affects existing orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    /// Unique across restaurants.
    pub name: String,
    pub category: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub rating: Option<Decimal>,
    pub delivery_fee: Decimal,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub category: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub rating: Option<Decimal>,
    pub delivery_fee: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub rating: Option<Decimal>,
    pub delivery_fee: Option<Decimal>,
}

/// One row of the per-restaurant sales report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSales {
    pub restaurant_id: RestaurantId,
    pub restaurant_name: String,
    /// Orders that were not cancelled.
    pub order_count: usize,
    pub revenue: Decimal,
}
