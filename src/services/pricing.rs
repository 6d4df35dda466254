//! # Pricing Calculator
//!
//! Resolves requested lines against the product catalogue and prices them with
//! decimal arithmetic. Order creation and the standalone quote both go through
//! [`PricingCalculator::price_lines`], so a quote always equals the subtotal of an
//! order placed with the same lines.

use crate::clients::ProductClient;
use crate::error::{DeliveryError, Result};
use crate::model::{sum_amounts, OrderLineItem, OrderLineRequest, RestaurantId};
use resource_actor::ActorClient;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Priced lines and their sum.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLines {
    pub items: Vec<OrderLineItem>,
    pub subtotal: Decimal,
}

#[derive(Clone)]
pub struct PricingCalculator {
    products: ProductClient,
}

/// Input checks that need no lookup: at least one line, every quantity at least 1.
pub fn validate_lines(lines: &[OrderLineRequest]) -> Result<()> {
    if lines.is_empty() {
        return Err(DeliveryError::Validation(
            "at least one item is required".to_string(),
        ));
    }
    if let Some(line) = lines.iter().find(|line| line.quantity == 0) {
        return Err(DeliveryError::Validation(format!(
            "quantity for {} must be at least 1",
            line.product_id
        )));
    }
    Ok(())
}

impl PricingCalculator {
    pub fn new(products: ProductClient) -> Self {
        Self { products }
    }

    /// Resolves and prices every line, in request order.
    ///
    /// Fails with `NotFound` naming the first missing product, or `Business` when a
    /// product is unavailable or, with `restaurant` given, belongs to another restaurant.
    /// Amounts beyond the `Decimal` range are a `Validation` error.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn price_lines(
        &self,
        lines: &[OrderLineRequest],
        restaurant: Option<RestaurantId>,
    ) -> Result<PricedLines> {
        validate_lines(lines)?;

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let product = self.products.require(line.product_id).await?;
            if !product.available {
                return Err(DeliveryError::Business(format!(
                    "product {} ({}) is unavailable",
                    product.name, product.id
                )));
            }
            if let Some(restaurant_id) = restaurant {
                if product.restaurant_id != restaurant_id {
                    return Err(DeliveryError::Business(format!(
                        "product {} ({}) does not belong to {restaurant_id}",
                        product.name, product.id
                    )));
                }
            }
            items.push(OrderLineItem::new(product.id, product.name, line.quantity, product.price)?);
        }

        let subtotal = sum_amounts(items.iter().map(|item| item.subtotal))?;
        debug!(%subtotal, "Lines priced");
        Ok(PricedLines { items, subtotal })
    }

    /// Subtotal of `lines` without placing an order.
    pub async fn quote(&self, lines: &[OrderLineRequest]) -> Result<Decimal> {
        Ok(self.price_lines(lines, None).await?.subtotal)
    }
}
