//! Demo run: one customer orders two pizzas from one restaurant.

use delivery::config::SystemConfig;
use delivery::lifecycle::{setup_tracing, DeliverySystem};
use delivery::model::{
    CustomerCreate, OrderLineRequest, OrderStatus, PlaceOrder, ProductCreate, RestaurantCreate, Role,
    UserCreate,
};
use rust_decimal::Decimal;
use std::error::Error;
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = SystemConfig::from_env()?;
    info!(?config, "Starting delivery system");
    let system = DeliverySystem::new(&config);

    let customer = system
        .customers
        .register(CustomerCreate {
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            phone: Some("11 99999-0000".to_string()),
            address: Some("Rua das Flores, 10".to_string()),
        })
        .await?;

    let restaurant = system
        .restaurants
        .register(RestaurantCreate {
            name: "Pizzaria Napoli".to_string(),
            category: "Pizza".to_string(),
            phone: None,
            address: None,
            rating: None,
            delivery_fee: Decimal::new(500, 2),
        })
        .await?;

    system
        .users
        .register(UserCreate {
            email: "admin@example.com".to_string(),
            password_hash: "$2b$12$demo.hash".to_string(),
            name: "Admin".to_string(),
            role: Some(Role::Admin),
            restaurant_id: None,
        })
        .await?;
    let admin = system.users.identify("admin@example.com").await?;

    let product = system
        .products
        .create(
            ProductCreate {
                name: "Margherita".to_string(),
                description: Some("Tomato, mozzarella, basil".to_string()),
                price: Decimal::new(2000, 2),
                category: "Pizza".to_string(),
                restaurant_id: restaurant.id,
            },
            &admin,
        )
        .await?;

    let order = system
        .orders
        .create_order(PlaceOrder {
            order_number: "PED-0001".to_string(),
            customer_id: customer.id,
            restaurant_id: restaurant.id,
            lines: vec![OrderLineRequest::new(product.id, 2)],
            delivery_address: "Rua das Flores, 10".to_string(),
            observations: None,
        })
        .instrument(info_span!("place_order"))
        .await?;
    info!(order = %order.id, total = %order.total, status = %order.status, "Order placed");

    let confirmed = system
        .orders
        .update_status(order.id, OrderStatus::Confirmed, &admin)
        .await?;
    info!(order = %confirmed.id, status = %confirmed.status, "Order confirmed");

    for line in system.orders.sales_report(&admin).await? {
        info!(
            restaurant = %line.restaurant_name,
            orders = line.order_count,
            revenue = %line.revenue,
            "Sales"
        );
    }

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}
