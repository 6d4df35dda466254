use chrono::{Duration, Utc};
use delivery::config::SystemConfig;
use delivery::lifecycle::DeliverySystem;
use delivery::model::{
    Customer, CustomerCreate, OrderLineRequest, OrderStatus, PlaceOrder, Product, ProductCreate,
    ProductUpdate, Restaurant, RestaurantCreate, RestaurantUpdate, Role, UserCreate,
};
use delivery::security::Identity;
use delivery::DeliveryError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

struct Fixture {
    system: DeliverySystem,
    customer: Customer,
    restaurant: Restaurant,
    product: Product,
    admin: Identity,
}

async fn fixture() -> Fixture {
    let system = DeliverySystem::new(&SystemConfig::default());

    let customer = system
        .customers
        .register(CustomerCreate {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            phone: None,
            address: Some("Rua A, 10".into()),
        })
        .await
        .expect("Failed to register customer");

    let restaurant = system
        .restaurants
        .register(RestaurantCreate {
            name: "Napoli".into(),
            category: "Pizza".into(),
            phone: None,
            address: None,
            rating: None,
            delivery_fee: dec!(5.00),
        })
        .await
        .expect("Failed to register restaurant");

    system
        .users
        .register(UserCreate {
            email: "admin@example.com".into(),
            password_hash: "hash".into(),
            name: "Admin".into(),
            role: Some(Role::Admin),
            restaurant_id: None,
        })
        .await
        .expect("Failed to register admin");
    let admin = system.users.identify("admin@example.com").await.unwrap();

    let product = system
        .products
        .create(
            ProductCreate {
                name: "Margherita".into(),
                description: None,
                price: dec!(20.00),
                category: "Pizza".into(),
                restaurant_id: restaurant.id,
            },
            &admin,
        )
        .await
        .expect("Failed to create product");

    Fixture {
        system,
        customer,
        restaurant,
        product,
        admin,
    }
}

fn place(f: &Fixture, number: &str, quantity: u32) -> PlaceOrder {
    PlaceOrder {
        order_number: number.into(),
        customer_id: f.customer.id,
        restaurant_id: f.restaurant.id,
        lines: vec![OrderLineRequest::new(f.product.id, quantity)],
        delivery_address: "Rua A, 10".into(),
        observations: Some("no onions".into()),
    }
}

/// Full end-to-end run with all real actors.
#[tokio::test]
async fn test_order_is_priced_from_catalogue_and_fee() {
    let f = fixture().await;

    let order = f.system.orders.create_order(place(&f, "PED-001", 2)).await.unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.subtotal, dec!(40.00));
    assert_eq!(order.delivery_fee, dec!(5.00));
    assert_eq!(order.total, dec!(45.00));
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].product_name, "Margherita");
    assert_eq!(order.items[0].unit_price, dec!(20.00));
    assert_eq!(order.items[0].subtotal, dec!(40.00));

    let stored = f.system.orders.get_order(order.id, &f.admin).await.unwrap();
    assert_eq!(stored, order);

    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_quote_matches_placed_subtotal() {
    let f = fixture().await;
    let lines = vec![OrderLineRequest::new(f.product.id, 3)];

    let quote = f.system.orders.quote_total(&lines).await.unwrap();
    let order = f
        .system
        .orders
        .create_order(PlaceOrder {
            lines,
            ..place(&f, "PED-001", 1)
        })
        .await
        .unwrap();

    assert_eq!(quote, dec!(60.00));
    assert_eq!(order.subtotal, quote);
    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_status_graph_is_enforced() {
    let f = fixture().await;
    let order = f.system.orders.create_order(place(&f, "PED-001", 1)).await.unwrap();

    let confirmed = f
        .system
        .orders
        .update_status(order.id, OrderStatus::Confirmed, &f.admin)
        .await
        .unwrap();
    assert_eq!(confirmed.status, OrderStatus::Confirmed);
    assert_eq!(confirmed.version, 1);

    let backwards = f
        .system
        .orders
        .update_status(order.id, OrderStatus::Pending, &f.admin)
        .await;
    assert!(matches!(backwards, Err(DeliveryError::Business(_))));

    f.system
        .orders
        .update_status(order.id, OrderStatus::Preparing, &f.admin)
        .await
        .unwrap();
    let late_cancel = f.system.orders.cancel_order(order.id, &f.admin).await;
    assert!(matches!(late_cancel, Err(DeliveryError::Business(_))));

    let stored = f.system.orders.get_order(order.id, &f.admin).await.unwrap();
    assert_eq!(stored.status, OrderStatus::Preparing);
    assert_eq!(stored.version, 2);

    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancelling_twice_is_rejected() {
    let f = fixture().await;
    let order = f.system.orders.create_order(place(&f, "PED-001", 1)).await.unwrap();

    let cancelled = f.system.orders.cancel_order(order.id, &f.admin).await.unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);

    let again = f.system.orders.cancel_order(order.id, &f.admin).await;
    assert!(matches!(again, Err(DeliveryError::Business(_))));
    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_order_number_is_rejected() {
    let f = fixture().await;
    f.system.orders.create_order(place(&f, "PED-001", 1)).await.unwrap();

    let duplicate = f.system.orders.create_order(place(&f, "PED-001", 2)).await;

    assert!(matches!(duplicate, Err(DeliveryError::Business(_))));
    let orders = f.system.orders.recent_orders(&f.admin).await.unwrap();
    assert_eq!(orders.len(), 1);
    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_fee_change_only_affects_new_orders() {
    let f = fixture().await;
    let before = f.system.orders.create_order(place(&f, "PED-001", 1)).await.unwrap();

    f.system
        .restaurants
        .update(
            f.restaurant.id,
            RestaurantUpdate {
                delivery_fee: Some(dec!(8.50)),
                ..Default::default()
            },
            &f.admin,
        )
        .await
        .unwrap();
    let after = f.system.orders.create_order(place(&f, "PED-002", 1)).await.unwrap();

    let stored = f.system.orders.get_order(before.id, &f.admin).await.unwrap();
    assert_eq!(stored.delivery_fee, dec!(5.00));
    assert_eq!(stored.total, dec!(25.00));
    assert_eq!(after.total, dec!(28.50));
    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unavailable_product_blocks_the_order() {
    let f = fixture().await;
    f.system
        .products
        .toggle_availability(f.product.id, &f.admin)
        .await
        .unwrap();

    let result = f.system.orders.create_order(place(&f, "PED-001", 1)).await;

    assert!(matches!(result, Err(DeliveryError::Business(_))));
    let listed = f
        .system
        .orders
        .list_by_customer(f.customer.id, &f.admin)
        .await
        .unwrap();
    assert!(listed.is_empty());
    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sales_report_skips_cancelled_orders() {
    let f = fixture().await;
    let quiet = f
        .system
        .restaurants
        .register(RestaurantCreate {
            name: "Sushi Bar".into(),
            category: "Japanese".into(),
            phone: None,
            address: None,
            rating: None,
            delivery_fee: dec!(0),
        })
        .await
        .unwrap();

    f.system.orders.create_order(place(&f, "PED-001", 2)).await.unwrap();
    let dropped = f.system.orders.create_order(place(&f, "PED-002", 1)).await.unwrap();
    f.system.orders.cancel_order(dropped.id, &f.admin).await.unwrap();

    let report = f.system.orders.sales_report(&f.admin).await.unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(report[0].restaurant_id, f.restaurant.id);
    assert_eq!(report[0].order_count, 1);
    assert_eq!(report[0].revenue, dec!(45.00));
    assert_eq!(report[1].restaurant_id, quiet.id);
    assert_eq!(report[1].order_count, 0);
    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_identify_resolves_restaurant_accounts() {
    let f = fixture().await;
    f.system
        .users
        .register(UserCreate {
            email: "owner@napoli.com".into(),
            password_hash: "hash".into(),
            name: "Owner".into(),
            role: Some(Role::Restaurante),
            restaurant_id: Some(f.restaurant.id),
        })
        .await
        .unwrap();

    let owner = f.system.users.identify("OWNER@napoli.com").await;
    let unknown = f.system.users.identify("ghost@example.com").await;

    assert_eq!(
        owner.unwrap(),
        Identity::Restaurant {
            email: "owner@napoli.com".into(),
            restaurant_id: f.restaurant.id,
        }
    );
    assert!(matches!(unknown, Err(DeliveryError::NotFound(_))));
    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_restaurant_account_needs_existing_restaurant() {
    let f = fixture().await;

    let result = f
        .system
        .users
        .register(UserCreate {
            email: "owner@nowhere.com".into(),
            password_hash: "hash".into(),
            name: "Owner".into(),
            role: Some(Role::Restaurante),
            restaurant_id: Some(delivery::model::RestaurantId(99)),
        })
        .await;

    assert!(matches!(result, Err(DeliveryError::NotFound(_))));
    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_price_change_keeps_order_snapshot() {
    let f = fixture().await;
    let order = f.system.orders.create_order(place(&f, "PED-001", 2)).await.unwrap();

    let repriced = f
        .system
        .products
        .update(
            f.product.id,
            ProductUpdate {
                price: Some(dec!(26.00)),
                ..Default::default()
            },
            &f.admin,
        )
        .await
        .unwrap();
    assert_eq!(repriced.price, dec!(26.00));

    let stored = f.system.orders.get_order(order.id, &f.admin).await.unwrap();
    assert_eq!(stored.items[0].unit_price, dec!(20.00));
    assert_eq!(stored.subtotal, dec!(40.00));
    assert_eq!(stored.total, dec!(45.00));

    let quote = f
        .system
        .orders
        .quote_total(&[OrderLineRequest::new(f.product.id, 2)])
        .await
        .unwrap();
    assert_eq!(quote, dec!(52.00));
    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_between_is_inclusive() {
    let f = fixture().await;
    let order = f.system.orders.create_order(place(&f, "PED-001", 1)).await.unwrap();

    let exact = f
        .system
        .orders
        .list_between(order.created_at, order.created_at, &f.admin)
        .await
        .unwrap();
    let later = f
        .system
        .orders
        .list_between(
            order.created_at + Duration::seconds(1),
            Utc::now() + Duration::hours(1),
            &f.admin,
        )
        .await
        .unwrap();
    let inverted = f
        .system
        .orders
        .list_between(Utc::now(), order.created_at - Duration::seconds(1), &f.admin)
        .await;

    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].id, order.id);
    assert!(later.is_empty());
    assert!(matches!(inverted, Err(DeliveryError::Validation(_))));
    f.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_out_of_range_amounts_fail_cleanly() {
    let f = fixture().await;
    let gold = f
        .system
        .products
        .create(
            ProductCreate {
                name: "Gold leaf pizza".into(),
                description: None,
                price: Decimal::from_i128_with_scale(10_i128.pow(25), 0),
                category: "Pizza".into(),
                restaurant_id: f.restaurant.id,
            },
            &f.admin,
        )
        .await
        .unwrap();
    let lines = vec![OrderLineRequest::new(gold.id, 100_000)];

    let quote = f.system.orders.quote_total(&lines).await;
    let placed = f
        .system
        .orders
        .create_order(PlaceOrder {
            lines,
            ..place(&f, "PED-001", 1)
        })
        .await;

    assert!(matches!(quote, Err(DeliveryError::Validation(_))));
    assert!(matches!(placed, Err(DeliveryError::Validation(_))));

    // The order store is still serving requests.
    let order = f.system.orders.create_order(place(&f, "PED-002", 1)).await.unwrap();
    assert_eq!(order.total, dec!(25.00));
    f.system.shutdown().await.unwrap();
}
