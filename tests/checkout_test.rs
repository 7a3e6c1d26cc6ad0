use async_trait::async_trait;
use cafe_order::checkout::{
    notice, CheckoutError, CheckoutServices, CheckoutSession, CheckoutSettings, CheckoutStep,
};
use cafe_order::model::{
    Cart, CartId, CartLine, MenuItemId, OrderRequest, PaymentMethodInfo, PlacedOrder, ServiceType,
};
use cafe_order::services::{
    OrderService, PaymentMethodSource, ReceiptImage, ReceiptUploader, ServiceError,
    StaticPaymentMethods,
};
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records every request and answers with a fixed result.
struct FakeOrders {
    requests: Mutex<Vec<OrderRequest>>,
    reject_with: Option<&'static str>,
}

impl FakeOrders {
    fn accepting() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reject_with: None,
        })
    }

    fn rejecting(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reject_with: Some(message),
        })
    }

    fn requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderService for FakeOrders {
    async fn create_order(&self, request: OrderRequest) -> Result<PlacedOrder, ServiceError> {
        self.requests.lock().unwrap().push(request);
        match self.reject_with {
            Some(message) => Err(ServiceError::Rejected(message.to_string())),
            None => Ok(PlacedOrder {
                id: "8c1f2e9a-41d7-4b0e-9f3a-6d2b7e5c4a1b".to_string(),
                order_number: Some(42),
            }),
        }
    }
}

struct FakeUploader {
    uploaded: Mutex<Vec<String>>,
    reject_with: Option<&'static str>,
}

impl FakeUploader {
    fn new(reject_with: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            uploaded: Mutex::new(Vec::new()),
            reject_with,
        })
    }
}

#[async_trait]
impl ReceiptUploader for FakeUploader {
    async fn upload(&self, receipt: ReceiptImage) -> Result<String, ServiceError> {
        if let Some(message) = self.reject_with {
            return Err(ServiceError::Rejected(message.to_string()));
        }
        self.uploaded.lock().unwrap().push(receipt.file_name.clone());
        Ok(format!(
            "https://res.cloudinary.com/demo/image/upload/receipts/{}",
            receipt.file_name
        ))
    }
}

struct BrokenPaymentMethods;

#[async_trait]
impl PaymentMethodSource for BrokenPaymentMethods {
    async fn payment_methods(&self) -> Result<Vec<PaymentMethodInfo>, ServiceError> {
        Err(ServiceError::Rejected("permission denied".to_string()))
    }
}

fn cart() -> Cart {
    let mut cart = Cart::new(CartId(1));
    cart.lines.push(CartLine {
        line_id: 1,
        menu_item_id: MenuItemId(1),
        name: "Tapsilog".to_string(),
        selected_variation: None,
        selected_add_ons: Vec::new(),
        unit_price: dec!(220),
        quantity: 2,
    });
    cart
}

fn services(
    orders: Arc<FakeOrders>,
    uploader: Option<Arc<FakeUploader>>,
) -> CheckoutServices {
    CheckoutServices {
        orders,
        uploader: uploader.map(|u| u as Arc<dyn ReceiptUploader>),
        payment_methods: Arc::new(StaticPaymentMethods::e_wallets("Acir Cafe")),
    }
}

fn receipt() -> ReceiptImage {
    // Not a decodable image, so it is uploaded unchanged.
    ReceiptImage::new("gcash-receipt.heic", "image/heic", vec![0, 1, 2, 3]).unwrap()
}

async fn at_payment(services: CheckoutServices) -> CheckoutSession {
    let mut session = CheckoutSession::start(&cart(), services, CheckoutSettings::default())
        .await
        .unwrap();
    session.set_customer_name("  Maria  ");
    session.set_service_type(ServiceType::TakeOut);
    session.proceed_to_payment().unwrap();
    session
}

#[tokio::test]
async fn test_messenger_checkout_with_receipt() {
    let orders = FakeOrders::accepting();
    let uploader = FakeUploader::new(None);
    let mut session = at_payment(services(orders.clone(), Some(uploader.clone()))).await;

    assert_eq!(session.selected_payment_method().unwrap().name, "GCash");
    session.select_payment_method("maya").unwrap();
    session.attach_receipt(receipt());

    let redirect = session.place_order().await.unwrap();
    assert_eq!(redirect.order_number, "042");
    assert!(redirect
        .link
        .starts_with("https://m.me/61579693577478?text=%F0%9F%9B%92%20ACIR%20CAFE%20ORDER"));
    assert!(redirect.message.contains("👤 Customer: Maria"));
    assert!(redirect.message.contains("📍 Service: Take Out"));
    assert!(redirect.message.contains("• Tapsilog x2 - ₱440"));
    assert!(redirect.message.contains("💳 Payment: Maya"));
    assert!(redirect.message.contains(
        "📸 Payment Receipt: https://res.cloudinary.com/demo/image/upload/receipts/gcash-receipt.heic"
    ));
    assert_eq!(session.step(), &CheckoutStep::Redirected(redirect.clone()));
    assert_eq!(session.notice(), Some(notice::RECEIPT_UPLOADED));

    let requests = orders.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].customer_name, "Maria");
    assert_eq!(requests[0].payment_method, "maya");
    assert_eq!(requests[0].total, dec!(440));
    assert!(requests[0].receipt_url.is_some());
    assert_eq!(
        *uploader.uploaded.lock().unwrap(),
        vec!["gcash-receipt.heic".to_string()]
    );
}

#[tokio::test]
async fn test_upload_failure_blocks_order_until_receipt_removed() {
    let orders = FakeOrders::accepting();
    let mut session = at_payment(services(
        orders.clone(),
        Some(FakeUploader::new(Some("File size too large"))),
    ))
    .await;
    session.attach_receipt(receipt());

    let err = session.place_order().await.unwrap_err();
    let shown = "Upload failed: File size too large. Please try again or continue without receipt.";
    assert_eq!(err, CheckoutError::UploadFailed(shown.to_string()));
    assert_eq!(session.upload_error(), Some("File size too large"));
    assert_eq!(session.notice(), Some(shown));
    assert_eq!(session.step(), &CheckoutStep::Payment);
    assert!(orders.requests().is_empty());

    session.remove_receipt();
    assert_eq!(session.upload_error(), None);
    let redirect = session.place_order().await.unwrap();
    assert!(redirect
        .message
        .contains("📸 Payment Screenshot: Please attach your payment receipt screenshot"));
    assert_eq!(orders.requests()[0].receipt_url, None);
}

#[tokio::test]
async fn test_receipt_without_uploader() {
    let mut session = at_payment(services(FakeOrders::accepting(), None)).await;
    session.attach_receipt(receipt());

    let err = session.place_order().await.unwrap_err();
    assert_eq!(
        err,
        CheckoutError::UploadFailed(notice::upload_failed("Receipt upload is not configured"))
    );
}

#[tokio::test]
async fn test_payment_errors_ask_to_wait() {
    let mut session = at_payment(services(FakeOrders::rejecting("rate limit exceeded"), None)).await;
    assert_eq!(
        session.place_order().await.unwrap_err(),
        CheckoutError::OrderFailed(notice::TOO_MANY_ORDERS.to_string())
    );

    let mut session = at_payment(services(FakeOrders::rejecting("connection reset"), None)).await;
    session.place_order().await.unwrap_err();
    assert_eq!(session.notice(), Some(notice::TOO_MANY_ORDERS));
    assert_eq!(session.step(), &CheckoutStep::Payment);
}

async fn counter_notice(error: &'static str) -> Option<String> {
    let mut session = CheckoutSession::start(
        &cart(),
        services(FakeOrders::rejecting(error), None),
        CheckoutSettings::default(),
    )
    .await
    .unwrap();
    session.set_customer_name("Jose");
    session.confirm_at_counter().await.unwrap_err();
    assert_eq!(session.step(), &CheckoutStep::Details);
    session.notice().map(str::to_string)
}

#[tokio::test]
async fn test_counter_errors_become_notices() {
    assert_eq!(
        counter_notice("rate limit exceeded").await.as_deref(),
        Some(notice::TOO_MANY_ORDERS)
    );
    assert_eq!(
        counter_notice("missing identifiers").await.as_deref(),
        Some(notice::ORDER_FAILED)
    );
    assert_eq!(
        counter_notice("connection reset").await.as_deref(),
        Some(notice::ORDER_FAILED)
    );
    let stock = "Insufficient stock for Tapsilog: requested 2, available 1";
    assert_eq!(counter_notice(stock).await.as_deref(), Some(stock));
}

#[tokio::test(start_paused = true)]
async fn test_counter_confirmation_countdown() {
    let orders = FakeOrders::accepting();
    let mut session =
        CheckoutSession::start(&cart(), services(orders.clone(), None), CheckoutSettings::default())
            .await
            .unwrap();

    assert_eq!(
        session.confirm_at_counter().await.unwrap_err(),
        CheckoutError::MissingCustomerName
    );
    assert!(orders.requests().is_empty());

    session.set_customer_name("Jose");
    let confirmation = session.confirm_at_counter().await.unwrap();
    assert_eq!(confirmation.badge(), "#042");
    assert_eq!(confirmation.countdown.done_label(), "Done (5)");
    assert_eq!(orders.requests()[0].payment_method, "counter");
    assert_eq!(orders.requests()[0].receipt_url, None);

    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(session.finish(), Err(CheckoutError::CountdownRunning(3)));

    tokio::time::advance(Duration::from_secs(3)).await;
    session.finish().unwrap();
    assert_eq!(session.step(), &CheckoutStep::Completed);
}

#[tokio::test]
async fn test_navigation_and_payment_method_fallback() {
    let empty = Cart::new(CartId(2));
    let result = CheckoutSession::start(
        &empty,
        services(FakeOrders::accepting(), None),
        CheckoutSettings::default(),
    )
    .await;
    assert!(matches!(result, Err(CheckoutError::EmptyCart)));

    let services = CheckoutServices {
        payment_methods: Arc::new(BrokenPaymentMethods),
        ..services(FakeOrders::accepting(), None)
    };
    let mut session = CheckoutSession::start(&cart(), services, CheckoutSettings::default())
        .await
        .unwrap();
    assert!(session.payment_methods().is_empty());
    assert!(session.selected_payment_method().is_none());
    assert_eq!(
        session.select_payment_method("gcash"),
        Err(CheckoutError::UnknownPaymentMethod("gcash".to_string()))
    );

    assert_eq!(
        session.proceed_to_payment(),
        Err(CheckoutError::MissingCustomerName)
    );
    session.set_customer_name("Ana");
    session.proceed_to_payment().unwrap();
    assert_eq!(session.back(), &CheckoutStep::Details);
    assert_eq!(session.back(), &CheckoutStep::Exited);

    assert_eq!(
        session.place_order().await.unwrap_err(),
        CheckoutError::WrongStep("exited")
    );
}

#[tokio::test]
async fn test_unknown_payment_method_name_falls_back_to_id() {
    let services = CheckoutServices {
        payment_methods: Arc::new(BrokenPaymentMethods),
        ..services(FakeOrders::accepting(), None)
    };
    let mut session = CheckoutSession::start(&cart(), services, CheckoutSettings::default())
        .await
        .unwrap();
    session.set_customer_name("Ana");
    session.proceed_to_payment().unwrap();

    let redirect = session.place_order().await.unwrap();
    assert!(redirect.message.contains("💳 Payment: gcash"));
}
