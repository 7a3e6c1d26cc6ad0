use cafe_order::clients::{MenuClient, OrderClient};
use cafe_order::framework::mock::MockClient;
use cafe_order::framework::{ActorClient, FrameworkError};
use cafe_order::menu_actor::{MenuActionResult, MenuError};
use cafe_order::model::{CartLine, MenuItem, MenuItemId, OrderRequest, ServiceType};
use cafe_order::order_actor::OrderError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn line(line_id: u32, item: u32, name: &str, unit_price: Decimal, quantity: u32) -> CartLine {
    CartLine {
        line_id,
        menu_item_id: MenuItemId(item),
        name: name.to_string(),
        selected_variation: None,
        selected_add_ons: Vec::new(),
        unit_price,
        quantity,
    }
}

fn request(items: Vec<CartLine>) -> OrderRequest {
    OrderRequest {
        customer_name: "Maria".to_string(),
        service_type: ServiceType::DineIn,
        payment_method: "gcash".to_string(),
        reference_number: String::new(),
        notes: String::new(),
        total: items.iter().map(|l| l.line_total()).sum(),
        items,
        receipt_url: None,
    }
}

/// Real order actor with a mocked menu: placing an order reserves stock for
/// every line, in order.
#[tokio::test]
async fn test_order_actor_with_mocked_menu() {
    let mut menu_mock = MockClient::<MenuItem>::new();
    menu_mock
        .expect_action(MenuItemId(1))
        .return_ok(MenuActionResult::ReserveStock(None));
    menu_mock
        .expect_action(MenuItemId(2))
        .return_ok(MenuActionResult::ReserveStock(Some(7)));

    let menu_client = MenuClient::new(menu_mock.client());
    let (order_actor, order_generic_client) = cafe_order::order_actor::new();
    let order_client = OrderClient::new(order_generic_client);
    let actor_handle = tokio::spawn(order_actor.run(menu_client));

    let result = order_client
        .create_order(request(vec![
            line(1, 1, "Spanish Latte", dec!(150), 1),
            line(2, 2, "Ube Cheese Pandesal", dec!(45), 3),
        ]))
        .await;
    assert!(result.is_ok(), "Order creation failed: {:?}", result.err());
    let order_id = result.unwrap();

    let order = order_client.order(order_id).await.unwrap();
    assert_eq!(order.order_number, 1);
    assert_eq!(order.request.total, dec!(285));
    assert_eq!(order.placed().display_number(), "001");

    menu_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

/// A failed reservation releases what was already reserved and the order is
/// not stored.
#[tokio::test]
async fn test_failed_reservation_rolls_back() {
    let mut menu_mock = MockClient::<MenuItem>::new();
    menu_mock
        .expect_action(MenuItemId(1))
        .return_ok(MenuActionResult::ReserveStock(Some(4)));
    menu_mock
        .expect_action(MenuItemId(2))
        .return_err(FrameworkError::EntityError(Box::new(
            MenuError::InsufficientStock {
                name: "Ensaymada".into(),
                requested: 5,
                available: 1,
            },
        )));
    menu_mock
        .expect_action(MenuItemId(1))
        .return_ok(MenuActionResult::ReleaseStock(Some(6)));

    let menu_client = MenuClient::new(menu_mock.client());
    let (order_actor, order_generic_client) = cafe_order::order_actor::new();
    let order_client = OrderClient::new(order_generic_client);
    let actor_handle = tokio::spawn(order_actor.run(menu_client));

    let err = order_client
        .create_order(request(vec![
            line(1, 1, "Tapsilog", dec!(220), 2),
            line(2, 2, "Ensaymada", dec!(85), 5),
        ]))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::Menu(MenuError::InsufficientStock {
            name: "Ensaymada".into(),
            requested: 5,
            available: 1,
        })
    );
    assert!(order_client.list().await.unwrap().is_empty());

    menu_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

/// Validation runs before any stock is touched: the mock has no expectations.
#[tokio::test]
async fn test_mismatched_total_rejected() {
    let menu_mock = MockClient::<MenuItem>::new();
    let (order_actor, order_generic_client) = cafe_order::order_actor::new();
    let order_client = OrderClient::new(order_generic_client);
    let actor_handle = tokio::spawn(order_actor.run(MenuClient::new(menu_mock.client())));

    let mut params = request(vec![line(1, 1, "Spanish Latte", dec!(150), 2)]);
    params.total = dec!(150);
    let err = order_client.create_order(params).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)));

    let mut params = request(vec![line(1, 1, "Spanish Latte", dec!(150), 1)]);
    params.customer_name = "   ".to_string();
    let err = order_client.create_order(params).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)));

    menu_mock.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}
