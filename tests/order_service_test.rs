use chrono::Utc;
use delivery::clients::{CustomerClient, OrderClient, ProductClient, RestaurantClient};
use delivery::model::{
    Customer, CustomerId, Order, OrderId, OrderLineRequest, OrderStatus, PlaceOrder, Product,
    ProductId, Restaurant, RestaurantId,
};
use delivery::services::{OrderService, PricingCalculator};
use delivery::DeliveryError;
use resource_actor::mock::{create_mock_client, expect_create, MockClient};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn customer(active: bool) -> Customer {
    Customer {
        id: CustomerId(1),
        name: "Ana".into(),
        email: "ana@example.com".into(),
        phone: None,
        address: None,
        active,
        registered_at: Utc::now(),
    }
}

fn restaurant(id: u32, fee: Decimal) -> Restaurant {
    Restaurant {
        id: RestaurantId(id),
        name: format!("R{id}"),
        category: "Pizza".into(),
        phone: None,
        address: None,
        rating: None,
        delivery_fee: fee,
        active: true,
    }
}

fn product(restaurant: u32) -> Product {
    Product {
        id: ProductId(1),
        name: "Margherita".into(),
        description: None,
        price: dec!(20.00),
        category: "Pizza".into(),
        available: true,
        restaurant_id: RestaurantId(restaurant),
    }
}

fn request() -> PlaceOrder {
    PlaceOrder {
        order_number: "PED-001".into(),
        customer_id: CustomerId(1),
        restaurant_id: RestaurantId(1),
        lines: vec![OrderLineRequest::new(ProductId(1), 2)],
        delivery_address: "Rua A, 10".into(),
        observations: None,
    }
}

fn service(
    orders: OrderClient,
    customers: &MockClient<Customer>,
    restaurants: &MockClient<Restaurant>,
    products: &MockClient<Product>,
) -> OrderService {
    OrderService::new(
        orders,
        CustomerClient::new(customers.client()),
        RestaurantClient::new(restaurants.client()),
        PricingCalculator::new(ProductClient::new(products.client())),
        10,
    )
}

/// Real manager, mocked stores: the order store receives exactly one fully
/// priced creation request.
#[tokio::test]
async fn test_create_order_sends_priced_request() {
    let mut customers = MockClient::<Customer>::new();
    let mut restaurants = MockClient::<Restaurant>::new();
    let mut products = MockClient::<Product>::new();
    customers.expect_get(CustomerId(1)).return_ok(Some(customer(true)));
    restaurants
        .expect_get(RestaurantId(1))
        .return_ok(Some(restaurant(1, dec!(5.00))));
    products.expect_get(ProductId(1)).return_ok(Some(product(1)));

    let (order_client, mut receiver) = create_mock_client::<Order>(10);
    let service = service(OrderClient::new(order_client), &customers, &restaurants, &products);

    let handle = tokio::spawn(async move { service.create_order(request()).await });

    let (params, respond_to) = expect_create(&mut receiver)
        .await
        .expect("Expected a create request");
    assert_eq!(params.subtotal, dec!(40.00));
    assert_eq!(params.delivery_fee, dec!(5.00));
    assert_eq!(params.total, dec!(45.00));
    assert_eq!(params.items.len(), 1);
    assert_eq!(params.items[0].unit_price, dec!(20.00));
    assert_eq!(params.items[0].quantity, 2);

    let stored = Order {
        id: OrderId(1),
        order_number: params.order_number,
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
    };
    respond_to.send(Ok(stored)).unwrap();

    let order = handle.await.unwrap().unwrap();
    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.total, dec!(45.00));

    customers.verify();
    restaurants.verify();
    products.verify();
}

#[tokio::test]
async fn test_inactive_customer_never_reaches_order_store() {
    let mut customers = MockClient::<Customer>::new();
    let restaurants = MockClient::<Restaurant>::new();
    let products = MockClient::<Product>::new();
    let order_mock = MockClient::<Order>::new();
    customers.expect_get(CustomerId(1)).return_ok(Some(customer(false)));

    let service = service(OrderClient::new(order_mock.client()), &customers, &restaurants, &products);
    let result = service.create_order(request()).await;

    assert!(matches!(result, Err(DeliveryError::Business(msg)) if msg.contains("inactive customer")));
    customers.verify();
    restaurants.verify();
    products.verify();
    order_mock.verify();
}

#[tokio::test]
async fn test_product_of_other_restaurant_is_rejected() {
    let mut customers = MockClient::<Customer>::new();
    let mut restaurants = MockClient::<Restaurant>::new();
    let mut products = MockClient::<Product>::new();
    let order_mock = MockClient::<Order>::new();
    customers.expect_get(CustomerId(1)).return_ok(Some(customer(true)));
    restaurants
        .expect_get(RestaurantId(1))
        .return_ok(Some(restaurant(1, dec!(5.00))));
    products.expect_get(ProductId(1)).return_ok(Some(product(2)));

    let service = service(OrderClient::new(order_mock.client()), &customers, &restaurants, &products);
    let result = service.create_order(request()).await;

    assert!(matches!(result, Err(DeliveryError::Business(_))));
    order_mock.verify();
    products.verify();
}

#[tokio::test]
async fn test_invalid_input_is_rejected_before_any_lookup() {
    let customers = MockClient::<Customer>::new();
    let restaurants = MockClient::<Restaurant>::new();
    let products = MockClient::<Product>::new();
    let order_mock = MockClient::<Order>::new();

    let service = service(OrderClient::new(order_mock.client()), &customers, &restaurants, &products);
    let no_lines = service
        .create_order(PlaceOrder {
            lines: Vec::new(),
            ..request()
        })
        .await;
    let zero_quantity = service
        .create_order(PlaceOrder {
            lines: vec![OrderLineRequest::new(ProductId(1), 0)],
            ..request()
        })
        .await;

    assert!(matches!(no_lines, Err(DeliveryError::Validation(_))));
    assert!(matches!(zero_quantity, Err(DeliveryError::Validation(_))));
    customers.verify();
    order_mock.verify();
}

#[tokio::test]
async fn test_unknown_restaurant_is_not_found() {
    let mut customers = MockClient::<Customer>::new();
    let mut restaurants = MockClient::<Restaurant>::new();
    let products = MockClient::<Product>::new();
    let order_mock = MockClient::<Order>::new();
    customers.expect_get(CustomerId(1)).return_ok(Some(customer(true)));
    restaurants.expect_get(RestaurantId(1)).return_ok(None);

    let service = service(OrderClient::new(order_mock.client()), &customers, &restaurants, &products);
    let result = service.create_order(request()).await;

    assert!(matches!(result, Err(DeliveryError::NotFound(_))));
    restaurants.verify();
    order_mock.verify();
}
