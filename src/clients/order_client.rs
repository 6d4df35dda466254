//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! Orchestration (lookups, pricing, authorization) lives in
//! [`OrderService`](crate::services::OrderService); this client only talks to the store.
use crate::error::{DeliveryError, Result};
use crate::model::{CustomerId, Order, OrderCreate, OrderId, OrderStatus, RestaurantId};
use crate::order_actor::OrderAction;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resource_actor::{ActorClient, Query, ResourceClient};
use tracing::{info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores a fully priced order in a single request.
    #[instrument(skip(self, params), fields(order_number = %params.order_number))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order> {
        info!("Sending create_order to actor");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn transition(&self, id: OrderId, next: OrderStatus) -> Result<Order> {
        Ok(self.inner.perform_action(id, OrderAction::Transition(next)).await?)
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: OrderId) -> Result<Order> {
        Ok(self.inner.perform_action(id, OrderAction::Cancel).await?)
    }

    pub async fn list_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Order>> {
        self.list_where("customer", move |o: &Order| o.customer_id == customer_id)
            .await
    }

    pub async fn list_by_restaurant(&self, restaurant_id: RestaurantId) -> Result<Vec<Order>> {
        self.list_where("restaurant", move |o: &Order| o.restaurant_id == restaurant_id)
            .await
    }

    pub async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>> {
        self.list_where("status", move |o: &Order| o.status == status).await
    }

    /// Orders created within `[from, to]`.
    pub async fn list_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Order>> {
        self.list_where("created between", move |o: &Order| {
            o.created_at >= from && o.created_at <= to
        })
        .await
    }

    pub async fn list_all(&self) -> Result<Vec<Order>> {
        Ok(self.inner.list(Query::all()).await?)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = DeliveryError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }
}
