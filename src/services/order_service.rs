//! # Order Lifecycle Manager
//!
//! Places orders, moves them through the status graph and answers order queries,
//! applying the ownership guard on every caller-facing operation.
//!
//! ## Placing an order
//!
//! 1. Input checks (order number, address, lines), before any lookup.
//! 2. Customer exists and is active.
//! 3. Restaurant exists and is active.
//! 4. Every line is priced by [`PricingCalculator`]: product exists, is available and
//!    belongs to the restaurant.
//! 5. `total = subtotal + restaurant.delivery_fee`, then a single create request.
//!
//! Nothing is written unless every step passed, so a rejected order leaves no trace.

use super::pricing::{validate_lines, PricingCalculator};
use crate::clients::{CustomerClient, OrderClient, RestaurantClient};
use crate::error::{DeliveryError, Result};
use crate::model::{
    require_non_blank, sum_amounts, CustomerId, Order, OrderCreate, OrderId, OrderLineRequest, OrderStatus, PlaceOrder,
    RestaurantId, RestaurantSales,
};
use crate::security::{guard, Identity};
use chrono::{DateTime, Utc};
use resource_actor::ActorClient;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct OrderService {
    orders: OrderClient,
    customers: CustomerClient,
    restaurants: RestaurantClient,
    pricing: PricingCalculator,
    recent_orders_limit: usize,
}

fn newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

impl OrderService {
    pub fn new(
        orders: OrderClient,
        customers: CustomerClient,
        restaurants: RestaurantClient,
        pricing: PricingCalculator,
        recent_orders_limit: usize,
    ) -> Self {
        Self {
            orders,
            customers,
            restaurants,
            pricing,
            recent_orders_limit,
        }
    }

    #[instrument(skip(self, request), fields(order_number = %request.order_number))]
    pub async fn create_order(&self, request: PlaceOrder) -> Result<Order> {
        debug!(?request, "create_order called");
        require_non_blank("order number", &request.order_number)?;
        require_non_blank("delivery address", &request.delivery_address)?;
        validate_lines(&request.lines)?;

        let customer = self.customers.require(request.customer_id).await?;
        if !customer.active {
            return Err(DeliveryError::Business(format!(
                "inactive customer: {}",
                customer.id
            )));
        }

        let restaurant = self.restaurants.require(request.restaurant_id).await?;
        if !restaurant.active {
            return Err(DeliveryError::Business(format!(
                "inactive restaurant: {}",
                restaurant.name
            )));
        }

        let priced = self
            .pricing
            .price_lines(&request.lines, Some(restaurant.id))
            .await?;
        let total = sum_amounts([priced.subtotal, restaurant.delivery_fee])?;

        let order = self
            .orders
            .create_order(OrderCreate {
                order_number: request.order_number,
                customer_id: customer.id,
                restaurant_id: restaurant.id,
                items: priced.items,
                delivery_address: request.delivery_address,
                observations: request.observations,
                subtotal: priced.subtotal,
                delivery_fee: restaurant.delivery_fee,
                total,
            })
            .await?;

        info!(order = %order.id, %total, "Order placed");
        Ok(order)
    }

    /// Visible to ADMIN, the ordering customer and the serving restaurant.
    #[instrument(skip(self, identity))]
    pub async fn get_order(&self, id: OrderId, identity: &Identity) -> Result<Order> {
        let order = self.orders.require(id).await?;
        let customer = self.customers.require(order.customer_id).await?;
        guard::ensure_order_visible(identity, &customer.email, order.restaurant_id)?;
        Ok(order)
    }

    /// Orders of one customer, newest first. An existing customer without orders gets
    /// an empty list; an unknown customer is `NotFound`.
    #[instrument(skip(self, identity))]
    pub async fn list_by_customer(&self, customer_id: CustomerId, identity: &Identity) -> Result<Vec<Order>> {
        let customer = self.customers.require(customer_id).await?;
        guard::ensure_self_or_admin(identity, &customer.email)?;

        let mut orders = self.orders.list_by_customer(customer_id).await?;
        newest_first(&mut orders);
        Ok(orders)
    }

    /// Only ADMIN or the restaurant serving the order may move it.
    #[instrument(skip(self, identity))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus, identity: &Identity) -> Result<Order> {
        let order = self.orders.require(id).await?;
        guard::ensure_restaurant_owner(identity, order.restaurant_id)?;
        self.orders.transition(id, status).await
    }

    /// Only ADMIN or the customer who placed the order may cancel it.
    #[instrument(skip(self, identity))]
    pub async fn cancel_order(&self, id: OrderId, identity: &Identity) -> Result<Order> {
        let order = self.orders.require(id).await?;
        let customer = self.customers.require(order.customer_id).await?;
        guard::ensure_customer_owner(identity, &customer.email)?;
        self.orders.cancel(id).await
    }

    /// Subtotal the given lines would cost; nothing is stored.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn quote_total(&self, lines: &[OrderLineRequest]) -> Result<Decimal> {
        self.pricing.quote(lines).await
    }

    #[instrument(skip(self, identity))]
    pub async fn list_by_restaurant(&self, restaurant_id: RestaurantId, identity: &Identity) -> Result<Vec<Order>> {
        self.restaurants.require(restaurant_id).await?;
        guard::ensure_restaurant_owner(identity, restaurant_id)?;

        let mut orders = self.orders.list_by_restaurant(restaurant_id).await?;
        newest_first(&mut orders);
        Ok(orders)
    }

    #[instrument(skip(self, identity))]
    pub async fn list_by_status(&self, status: OrderStatus, identity: &Identity) -> Result<Vec<Order>> {
        guard::ensure_admin(identity)?;
        self.orders.list_by_status(status).await
    }

    /// The newest orders, up to the configured limit.
    #[instrument(skip(self, identity))]
    pub async fn recent_orders(&self, identity: &Identity) -> Result<Vec<Order>> {
        guard::ensure_admin(identity)?;
        let mut orders = self.orders.list_all().await?;
        newest_first(&mut orders);
        orders.truncate(self.recent_orders_limit);
        Ok(orders)
    }

    /// Orders created within `[from, to]`.
    #[instrument(skip(self, identity))]
    pub async fn list_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        identity: &Identity,
    ) -> Result<Vec<Order>> {
        if from > to {
            return Err(DeliveryError::Validation(format!(
                "period start {from} is after its end {to}"
            )));
        }
        guard::ensure_admin(identity)?;
        self.orders.list_between(from, to).await
    }

    /// Non-cancelled orders and revenue per restaurant, highest revenue first.
    #[instrument(skip(self, identity))]
    pub async fn sales_report(&self, identity: &Identity) -> Result<Vec<RestaurantSales>> {
        guard::ensure_admin(identity)?;

        let mut totals: HashMap<RestaurantId, (usize, Decimal)> = HashMap::new();
        for order in self.orders.list_all().await? {
            if order.status == OrderStatus::Cancelled {
                continue;
            }
            let entry = totals.entry(order.restaurant_id).or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 = sum_amounts([entry.1, order.total])?;
        }

        let mut report: Vec<RestaurantSales> = self
            .restaurants
            .list_all()
            .await?
            .into_iter()
            .map(|restaurant| {
                let (order_count, revenue) = totals.get(&restaurant.id).copied().unwrap_or_default();
                RestaurantSales {
                    restaurant_id: restaurant.id,
                    restaurant_name: restaurant.name,
                    order_count,
                    revenue,
                }
            })
            .collect();
        report.sort_by(|a, b| {
            b.revenue
                .cmp(&a.revenue)
                .then_with(|| a.restaurant_name.cmp(&b.restaurant_name))
        });
        Ok(report)
    }
}
