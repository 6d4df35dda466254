//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders arrive fully priced; the hooks here only guard the stored invariants:
//! line subtotals, `total == subtotal + delivery_fee`, unique order numbers and the
//! status graph.

use super::actions::OrderAction;
use crate::error::DeliveryError;
use crate::model::{line_amount, require_non_blank, sum_amounts, Order, OrderCreate, OrderId, OrderStatus};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use tracing::info;

impl Order {
    fn check_amounts(&self) -> Result<(), DeliveryError> {
        if self.items.is_empty() {
            return Err(DeliveryError::Validation("an order needs at least one item".to_string()));
        }
        for item in &self.items {
            if item.quantity == 0 || item.subtotal != line_amount(item.unit_price, item.quantity)? {
                return Err(DeliveryError::Validation(format!(
                    "line for {} is inconsistent",
                    item.product_id
                )));
            }
        }
        let subtotal = sum_amounts(self.items.iter().map(|item| item.subtotal))?;
        if subtotal != self.subtotal || self.total != sum_amounts([self.subtotal, self.delivery_fee])? {
            return Err(DeliveryError::Validation(format!(
                "order {} amounts do not add up",
                self.order_number
            )));
        }
        Ok(())
    }

    fn move_to(&mut self, next: OrderStatus) {
        info!(order = %self.id, from = %self.status, to = %next, "Status changed");
        self.status = next;
        self.version += 1;
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = ();
    type Error = DeliveryError;

    /// Every order starts PENDING at version 0.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            order_number: params.order_number.trim().to_string(),
            customer_id: params.customer_id,
            restaurant_id: params.restaurant_id,
            items: params.items,
            status: OrderStatus::Pending,
            delivery_address: params.delivery_address,
            observations: params.observations,
            subtotal: params.subtotal,
            delivery_fee: params.delivery_fee,
            total: params.total,
            created_at: Utc::now(),
            version: 0,
        })
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        require_non_blank("order number", &self.order_number)?;
        require_non_blank("delivery address", &self.delivery_address)?;
        self.check_amounts()
    }

    /// Orders only change through [`OrderAction`].
    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Err(DeliveryError::Business(
            "orders change only through status transitions".to_string(),
        ))
    }

    async fn handle_action(&mut self, action: OrderAction, _ctx: &()) -> Result<Order, Self::Error> {
        match action {
            OrderAction::Transition(next) => {
                if self.status.is_terminal() {
                    return Err(DeliveryError::Business(format!(
                        "order {} is already {}",
                        self.order_number, self.status
                    )));
                }
                if !self.status.can_transition_to(next) {
                    return Err(DeliveryError::Business(format!(
                        "order {} cannot go from {} to {}",
                        self.order_number, self.status, next
                    )));
                }
                self.move_to(next);
            }
            OrderAction::Cancel => {
                if self.status == OrderStatus::Cancelled {
                    return Err(DeliveryError::Business(format!(
                        "order {} is already cancelled",
                        self.order_number
                    )));
                }
                if !self.status.is_cancellable() {
                    return Err(DeliveryError::Business(format!(
                        "order {} cannot be cancelled while {}",
                        self.order_number, self.status
                    )));
                }
                self.move_to(OrderStatus::Cancelled);
            }
        }
        Ok(self.clone())
    }

    fn conflicts_with(&self, other: &Self) -> Option<String> {
        (self.order_number == other.order_number)
            .then(|| format!("order number {} already exists", self.order_number))
    }
}
