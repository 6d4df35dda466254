use delivery::config::SystemConfig;
use delivery::lifecycle::DeliverySystem;
use delivery::model::{
    Customer, CustomerCreate, OrderLineRequest, OrderStatus, PlaceOrder, ProductCreate, RestaurantCreate,
    RestaurantId, Role, UserCreate,
};
use delivery::security::Identity;
use delivery::DeliveryError;
use rust_decimal_macros::dec;

async fn register_customer(system: &DeliverySystem, name: &str, email: &str) -> Customer {
    system
        .customers
        .register(CustomerCreate {
            name: name.into(),
            email: email.into(),
            phone: None,
            address: None,
        })
        .await
        .expect("Failed to register customer")
}

async fn register_restaurant(system: &DeliverySystem, name: &str) -> RestaurantId {
    system
        .restaurants
        .register(RestaurantCreate {
            name: name.into(),
            category: "Pizza".into(),
            phone: None,
            address: None,
            rating: None,
            delivery_fee: dec!(5.00),
        })
        .await
        .expect("Failed to register restaurant")
        .id
}

fn admin() -> Identity {
    Identity::Admin {
        email: "admin@example.com".into(),
    }
}

fn customer_identity(email: &str) -> Identity {
    Identity::Customer { email: email.into() }
}

#[tokio::test]
async fn test_customer_cannot_list_another_customers_orders() {
    let system = DeliverySystem::new(&SystemConfig::default());
    let ana = register_customer(&system, "Ana", "ana@example.com").await;
    register_customer(&system, "Bruno", "bruno@example.com").await;

    let as_bruno = system
        .orders
        .list_by_customer(ana.id, &customer_identity("bruno@example.com"))
        .await;
    let as_ana = system
        .orders
        .list_by_customer(ana.id, &customer_identity("ana@example.com"))
        .await;
    let as_admin = system.orders.list_by_customer(ana.id, &admin()).await;

    assert!(matches!(as_bruno, Err(DeliveryError::AccessDenied(_))));
    assert!(as_ana.unwrap().is_empty());
    assert!(as_admin.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_visibility_and_ownership() {
    let system = DeliverySystem::new(&SystemConfig::default());
    let ana = register_customer(&system, "Ana", "ana@example.com").await;
    let napoli = register_restaurant(&system, "Napoli").await;
    let sushi = register_restaurant(&system, "Sushi Bar").await;
    let product = system
        .products
        .create(
            ProductCreate {
                name: "Margherita".into(),
                description: None,
                price: dec!(20.00),
                category: "Pizza".into(),
                restaurant_id: napoli,
            },
            &admin(),
        )
        .await
        .unwrap();
    let order = system
        .orders
        .create_order(PlaceOrder {
            order_number: "PED-001".into(),
            customer_id: ana.id,
            restaurant_id: napoli,
            lines: vec![OrderLineRequest::new(product.id, 1)],
            delivery_address: "Rua A, 10".into(),
            observations: None,
        })
        .await
        .unwrap();

    let napoli_staff = Identity::Restaurant {
        email: "staff@napoli.com".into(),
        restaurant_id: napoli,
    };
    let sushi_staff = Identity::Restaurant {
        email: "staff@sushi.com".into(),
        restaurant_id: sushi,
    };
    let stranger = customer_identity("bruno@example.com");

    assert!(system.orders.get_order(order.id, &napoli_staff).await.is_ok());
    assert!(system
        .orders
        .get_order(order.id, &customer_identity("ANA@example.com"))
        .await
        .is_ok());
    assert!(matches!(
        system.orders.get_order(order.id, &sushi_staff).await,
        Err(DeliveryError::AccessDenied(_))
    ));
    assert!(matches!(
        system.orders.get_order(order.id, &stranger).await,
        Err(DeliveryError::AccessDenied(_))
    ));

    // Only the serving restaurant moves the order; only the customer cancels it.
    assert!(matches!(
        system
            .orders
            .update_status(order.id, OrderStatus::Confirmed, &sushi_staff)
            .await,
        Err(DeliveryError::AccessDenied(_))
    ));
    assert!(matches!(
        system.orders.cancel_order(order.id, &napoli_staff).await,
        Err(DeliveryError::AccessDenied(_))
    ));
    let confirmed = system
        .orders
        .update_status(order.id, OrderStatus::Confirmed, &napoli_staff)
        .await
        .unwrap();
    assert_eq!(confirmed.status, OrderStatus::Confirmed);
    let cancelled = system
        .orders
        .cancel_order(order.id, &customer_identity("ana@example.com"))
        .await
        .unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_admin_only_reports() {
    let system = DeliverySystem::new(&SystemConfig::default());
    let napoli = register_restaurant(&system, "Napoli").await;
    let staff = Identity::Restaurant {
        email: "staff@napoli.com".into(),
        restaurant_id: napoli,
    };

    assert!(matches!(
        system.orders.sales_report(&staff).await,
        Err(DeliveryError::AccessDenied(_))
    ));
    assert!(matches!(
        system.orders.recent_orders(&customer_identity("ana@example.com")).await,
        Err(DeliveryError::AccessDenied(_))
    ));
    assert!(system
        .orders
        .list_by_status(OrderStatus::Pending, &admin())
        .await
        .unwrap()
        .is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_restaurant_account_manages_only_its_catalogue() {
    let system = DeliverySystem::new(&SystemConfig::default());
    let napoli = register_restaurant(&system, "Napoli").await;
    let sushi = register_restaurant(&system, "Sushi Bar").await;
    system
        .users
        .register(UserCreate {
            email: "owner@napoli.com".into(),
            password_hash: "hash".into(),
            name: "Owner".into(),
            role: Some(Role::Restaurante),
            restaurant_id: Some(napoli),
        })
        .await
        .unwrap();
    let owner = system.users.identify("owner@napoli.com").await.unwrap();

    let own = system
        .products
        .create(
            ProductCreate {
                name: "Calzone".into(),
                description: None,
                price: dec!(30.00),
                category: "Pizza".into(),
                restaurant_id: napoli,
            },
            &owner,
        )
        .await;
    let foreign = system
        .products
        .create(
            ProductCreate {
                name: "Temaki".into(),
                description: None,
                price: dec!(25.00),
                category: "Japanese".into(),
                restaurant_id: sushi,
            },
            &owner,
        )
        .await;

    assert!(own.is_ok());
    assert!(matches!(foreign, Err(DeliveryError::AccessDenied(_))));
    assert!(matches!(
        system.restaurants.deactivate(sushi, &owner).await,
        Err(DeliveryError::AccessDenied(_))
    ));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_inactive_account_cannot_identify() {
    let system = DeliverySystem::new(&SystemConfig::default());
    let user = system
        .users
        .register(UserCreate {
            email: "ana@example.com".into(),
            password_hash: "hash".into(),
            name: "Ana".into(),
            role: None,
            restaurant_id: None,
        })
        .await
        .unwrap();
    assert_eq!(user.role, Role::Cliente);

    system.users.toggle_active(user.id, &admin()).await.unwrap();

    assert!(matches!(
        system.users.identify("ana@example.com").await,
        Err(DeliveryError::AccessDenied(_))
    ));
    system.shutdown().await.unwrap();
}
