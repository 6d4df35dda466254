/// Represents a customer order and its line items.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`crate::order_actor`] for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Status changes ([`OrderAction`](crate::order_actor::OrderAction))
use super::{line_amount, CustomerId, OrderId, ProductId, RestaurantId};
use crate::error::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status.
///
/// ```text
/// PENDING          -> CONFIRMED | CANCELLED
/// CONFIRMED        -> PREPARING | CANCELLED
/// PREPARING        -> OUT_FOR_DELIVERY
/// OUT_FOR_DELIVERY -> DELIVERED
/// ```
///
/// `DELIVERED` and `CANCELLED` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether `next` is an edge of the status graph.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Preparing)
                | (Confirmed, Cancelled)
                | (Preparing, OutForDelivery)
                | (OutForDelivery, Delivered)
        )
    }

    /// Cancellation is only allowed before preparation starts.
    pub fn is_cancellable(self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(label)
    }
}

/// One product and quantity within an order.
///
/// `unit_price` is a snapshot taken when the order is placed; later price
/// changes on the product do not touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

impl OrderLineItem {
    /// Fails with `Validation` when `unit_price * quantity` is out of range.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Result<Self> {
        Ok(Self {
            product_id,
            product_name: product_name.into(),
            quantity,
            unit_price,
            subtotal: line_amount(unit_price, quantity)?,
        })
    }
}

/// A requested line: which product and how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLineRequest {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Everything a caller supplies to place an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrder {
    /// Externally supplied, unique across orders.
    pub order_number: String,
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub lines: Vec<OrderLineRequest>,
    pub delivery_address: String,
    pub observations: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub items: Vec<OrderLineItem>,
    pub status: OrderStatus,
    pub delivery_address: String,
    pub observations: Option<String>,
    pub subtotal: Decimal,
    /// Copied from the restaurant when the order was placed.
    pub delivery_fee: Decimal,
    /// Always `subtotal + delivery_fee`.
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    /// Incremented on every status change.
    pub version: u32,
}

/// A fully priced order, ready to be stored.
///
/// Built by [`OrderService`](crate::services::OrderService) after every lookup and
/// price check has passed; the store only re-checks the arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub order_number: String,
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub items: Vec<OrderLineItem>,
    pub delivery_address: String,
    pub observations: Option<String>,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}
