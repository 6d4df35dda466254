//! Plain records and payloads for every stored entity.
//!
//! Each record implements [`ActorEntity`](resource_actor::ActorEntity) in its actor module
//! (e.g. [`crate::order_actor`]); this module only holds the data.

pub mod customer;
pub mod order;
pub mod product;
pub mod restaurant;
pub mod user;

pub use customer::*;
pub use order::*;
pub use product::*;
pub use restaurant::*;
pub use user::*;

use crate::error::{DeliveryError, Result};
use rust_decimal::Decimal;

/// Declares a type-safe `u32` identifier named `<Entity>Id`.
///
/// Ids are generated by the owning actor, ordered by creation, and displayed
/// with a lowercase prefix (`CustomerId(3)` prints as `customer_3`).
macro_rules! entity_id {
    ($entity:ident, $prefix:literal) => {
        paste::paste! {
            #[doc = "Type-safe identifier for " $entity " records."]
            #[derive(
                Debug,
                Clone,
                Copy,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                serde::Serialize,
                serde::Deserialize,
            )]
            pub struct [<$entity Id>](pub u32);

            impl From<u32> for [<$entity Id>] {
                fn from(id: u32) -> Self {
                    Self(id)
                }
            }

            impl std::fmt::Display for [<$entity Id>] {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, concat!($prefix, "_{}"), self.0)
                }
            }
        }
    };
}

entity_id!(Customer, "customer");
entity_id!(Restaurant, "restaurant");
entity_id!(Product, "product");
entity_id!(Order, "order");
entity_id!(User, "user");

/// Rejects empty or whitespace-only text.
pub fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeliveryError::Validation(format!(
            "{field} must not be blank"
        )));
    }
    Ok(())
}

/// Rejects text that is not shaped like an e-mail address.
pub fn require_email(value: &str) -> Result<()> {
    require_non_blank("email", value)?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(DeliveryError::Validation(format!(
            "{value:?} is not a valid email"
        ))),
    }
}

/// Prices must be strictly positive.
pub fn require_price(price: Decimal) -> Result<()> {
    if price <= Decimal::ZERO {
        return Err(DeliveryError::Validation(format!(
            "price must be positive, got {price}"
        )));
    }
    Ok(())
}

/// Delivery fees may be zero but never negative.
pub fn require_fee(fee: Decimal) -> Result<()> {
    if fee < Decimal::ZERO {
        return Err(DeliveryError::Validation(format!(
            "delivery fee must not be negative, got {fee}"
        )));
    }
    Ok(())
}

fn amount_out_of_range() -> DeliveryError {
    DeliveryError::Validation("amount out of range".to_string())
}

/// `unit_price * quantity`, or `Validation` if the product overflows.
pub fn line_amount(unit_price: Decimal, quantity: u32) -> Result<Decimal> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or_else(amount_out_of_range)
}

/// Sum of `amounts`, or `Validation` if it overflows.
pub fn sum_amounts(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(amount_out_of_range)
}
