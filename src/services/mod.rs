//! Managers exposed to the transport layer.
//!
//! Each manager wraps one or more typed clients, validates input, applies the
//! [`guard`](crate::security::guard) and returns plain records or a
//! [`DeliveryError`](crate::error::DeliveryError).

pub mod customer_service;
pub mod order_service;
pub mod pricing;
pub mod product_service;
pub mod restaurant_service;
pub mod user_service;

pub use customer_service::CustomerService;
pub use order_service::OrderService;
pub use pricing::{PricedLines, PricingCalculator};
pub use product_service::ProductService;
pub use restaurant_service::RestaurantService;
pub use user_service::UserService;
