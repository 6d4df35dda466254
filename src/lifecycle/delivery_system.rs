use crate::config::SystemConfig;
use crate::error::{DeliveryError, Result};
use crate::services::{
    CustomerService, OrderService, PricingCalculator, ProductService, RestaurantService, UserService,
};
use crate::{customer_actor, order_actor, product_actor, restaurant_actor, user_actor};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running delivery backend: five actors and the managers in front of them.
///
/// # Architecture
///
/// - **Customer**, **Restaurant**, **Order** actors: no dependencies
/// - **Product** and **User** actors: hold a `RestaurantClient` to verify restaurant links
///
/// The managers only hold clients, so cloning one is cheap.
///
/// # Example
///
/// ```rust
/// use delivery::config::SystemConfig;
/// use delivery::lifecycle::DeliverySystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), delivery::DeliveryError> {
///     let system = DeliverySystem::new(&SystemConfig::default());
///     assert!(system.customers.list_active().await?.is_empty());
///     system.shutdown().await
/// }
/// ```
pub struct DeliverySystem {
    pub orders: OrderService,
    pub customers: CustomerService,
    pub restaurants: RestaurantService,
    pub products: ProductService,
    pub users: UserService,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl DeliverySystem {
    /// Creates every actor, injects contexts and spawns them. Must be called inside a
    /// Tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        let capacity = config.channel_capacity;

        // 1. Create actors (no dependencies yet)
        let (customer_actor, customer_client) = customer_actor::new(capacity);
        let (restaurant_actor, restaurant_client) = restaurant_actor::new(capacity);
        let (product_actor, product_client) = product_actor::new(capacity);
        let (order_actor, order_client) = order_actor::new(capacity);
        let (user_actor, user_client) = user_actor::new(capacity);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(product_actor.run(restaurant_client.clone())),
            tokio::spawn(order_actor.run(())),
            tokio::spawn(user_actor.run(restaurant_client.clone())),
        ];

        // 3. Managers
        let pricing = PricingCalculator::new(product_client.clone());
        let orders = OrderService::new(
            order_client,
            customer_client.clone(),
            restaurant_client.clone(),
            pricing,
            config.recent_orders_limit,
        );

        info!(capacity, "Delivery system started");
        Self {
            orders,
            customers: CustomerService::new(customer_client),
            restaurants: RestaurantService::new(restaurant_client.clone()),
            products: ProductService::new(product_client, restaurant_client),
            users: UserService::new(user_client),
            handles,
        }
    }

    /// Gracefully shuts down every actor.
    ///
    /// Dropping the managers closes the channels; each actor drains its queue and
    /// exits. The Restaurant actor stops last, once the Product and User actors have
    /// released the clients in their context.
    ///
    /// Returns a `Store` error if any actor task panicked.
    pub async fn shutdown(self) -> Result<()> {
        info!("Shutting down system...");

        let Self {
            orders,
            customers,
            restaurants,
            products,
            users,
            handles,
        } = self;
        drop((orders, customers, restaurants, products, users));

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(DeliveryError::Store(format!("actor task failed: {e}")));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
