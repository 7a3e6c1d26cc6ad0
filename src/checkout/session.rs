use super::confirmation::{Countdown, CounterConfirmation};
use super::message::{compose_message, messenger_link, OrderSummary};
use super::notice;
use super::{
    CheckoutError, CheckoutServices, CheckoutSettings, COUNTER_PAYMENT_METHOD,
    DEFAULT_PAYMENT_METHOD,
};
use crate::model::{Cart, CartLine, OrderRequest, PaymentMethodInfo, PlacedOrder, ServiceType};
use crate::services::{compress_receipt, ReceiptImage, ServiceError};
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

/// Where the Messenger hand-off sends the customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub order_number: String,
    pub message: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutStep {
    Details,
    Payment,
    Redirected(Redirect),
    CounterConfirmed(CounterConfirmation),
    Completed,
    /// Back to the cart.
    Exited,
}

impl CheckoutStep {
    fn name(&self) -> &'static str {
        match self {
            CheckoutStep::Details => "details",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Redirected(_) => "redirected",
            CheckoutStep::CounterConfirmed(_) => "confirmed",
            CheckoutStep::Completed => "completed",
            CheckoutStep::Exited => "exited",
        }
    }
}

/// One customer's way through checkout.
pub struct CheckoutSession {
    services: CheckoutServices,
    settings: CheckoutSettings,
    lines: Vec<CartLine>,
    total: Decimal,
    step: CheckoutStep,
    customer_name: String,
    service_type: ServiceType,
    notes: String,
    reference_number: String,
    payment_methods: Vec<PaymentMethodInfo>,
    payment_method: String,
    receipt: Option<ReceiptImage>,
    receipt_url: Option<String>,
    upload_error: Option<String>,
    notice: Option<String>,
}

impl CheckoutSession {
    /// Opens checkout for a cart and loads the payment methods. A failing
    /// payment-method source leaves the list empty.
    pub async fn start(
        cart: &Cart,
        services: CheckoutServices,
        settings: CheckoutSettings,
    ) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let payment_methods = match services.payment_methods.payment_methods().await {
            Ok(methods) => methods,
            Err(e) => {
                warn!(error = %e, "Could not load payment methods");
                Vec::new()
            }
        };
        let payment_method = if payment_methods.is_empty()
            || payment_methods.iter().any(|m| m.id == DEFAULT_PAYMENT_METHOD)
        {
            DEFAULT_PAYMENT_METHOD.to_string()
        } else {
            payment_methods[0].id.clone()
        };

        Ok(Self {
            services,
            settings,
            lines: cart.lines.clone(),
            total: cart.total(),
            step: CheckoutStep::Details,
            customer_name: String::new(),
            service_type: ServiceType::default(),
            notes: String::new(),
            reference_number: String::new(),
            payment_methods,
            payment_method,
            receipt: None,
            receipt_url: None,
            upload_error: None,
            notice: None,
        })
    }

    pub fn step(&self) -> &CheckoutStep {
        &self.step
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn upload_error(&self) -> Option<&str> {
        self.upload_error.as_deref()
    }

    pub fn receipt_url(&self) -> Option<&str> {
        self.receipt_url.as_deref()
    }

    pub fn has_receipt(&self) -> bool {
        self.receipt.is_some()
    }

    pub fn payment_methods(&self) -> &[PaymentMethodInfo] {
        &self.payment_methods
    }

    pub fn selected_payment_method(&self) -> Option<&PaymentMethodInfo> {
        self.payment_methods
            .iter()
            .find(|m| m.id == self.payment_method)
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn set_service_type(&mut self, service_type: ServiceType) {
        self.service_type = service_type;
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn details_valid(&self) -> bool {
        !self.customer_name.trim().is_empty()
    }

    fn require(&self, step: &CheckoutStep) -> Result<(), CheckoutError> {
        if std::mem::discriminant(&self.step) != std::mem::discriminant(step) {
            return Err(CheckoutError::WrongStep(self.step.name()));
        }
        Ok(())
    }

    fn require_details(&self) -> Result<(), CheckoutError> {
        self.require(&CheckoutStep::Details)?;
        if !self.details_valid() {
            return Err(CheckoutError::MissingCustomerName);
        }
        Ok(())
    }

    pub fn proceed_to_payment(&mut self) -> Result<(), CheckoutError> {
        self.require_details()?;
        self.step = CheckoutStep::Payment;
        Ok(())
    }

    /// Payment goes back to details, details back to the cart.
    pub fn back(&mut self) -> &CheckoutStep {
        self.step = match self.step {
            CheckoutStep::Payment => CheckoutStep::Details,
            CheckoutStep::Details => CheckoutStep::Exited,
            _ => return &self.step,
        };
        &self.step
    }

    pub fn select_payment_method(&mut self, id: &str) -> Result<(), CheckoutError> {
        if !self.payment_methods.iter().any(|m| m.id == id) {
            return Err(CheckoutError::UnknownPaymentMethod(id.to_string()));
        }
        self.payment_method = id.to_string();
        Ok(())
    }

    /// Replaces any earlier receipt and forgets its upload.
    pub fn attach_receipt(&mut self, receipt: ReceiptImage) {
        self.receipt = Some(receipt);
        self.receipt_url = None;
        self.upload_error = None;
    }

    pub fn remove_receipt(&mut self) {
        self.receipt = None;
        self.receipt_url = None;
        self.upload_error = None;
    }

    fn order_request(&self, payment_method: &str, receipt_url: Option<String>) -> OrderRequest {
        OrderRequest {
            customer_name: self.customer_name.trim().to_string(),
            service_type: self.service_type,
            payment_method: payment_method.to_string(),
            reference_number: self.reference_number.clone(),
            notes: self.notes.clone(),
            total: self.total,
            items: self.lines.clone(),
            receipt_url,
        }
    }

    /// `to_notice` turns the service's error text into what the customer sees.
    async fn create_order(
        &mut self,
        request: OrderRequest,
        to_notice: fn(&str) -> String,
    ) -> Result<PlacedOrder, CheckoutError> {
        match self.services.orders.create_order(request).await {
            Ok(placed) => Ok(placed),
            Err(e) => {
                warn!(error = %e, "Order creation failed");
                let shown = to_notice(&e.to_string());
                self.notice = Some(shown.clone());
                Err(CheckoutError::OrderFailed(shown))
            }
        }
    }

    /// Pay at the counter: creates the order with payment "counter" and no
    /// receipt, then shows the order number.
    #[instrument(skip(self))]
    pub async fn confirm_at_counter(&mut self) -> Result<CounterConfirmation, CheckoutError> {
        self.require_details()?;
        let request = self.order_request(COUNTER_PAYMENT_METHOD, None);
        let placed = self
            .create_order(request, notice::counter_order_failed)
            .await?;

        let confirmation = CounterConfirmation {
            order_number: placed.display_number(),
            countdown: Countdown::start(self.settings.counter_countdown),
        };
        info!(order_number = %confirmation.order_number, "Order confirmed at counter");
        self.step = CheckoutStep::CounterConfirmed(confirmation.clone());
        Ok(confirmation)
    }

    /// "Done" on the confirmation, once the countdown has run out.
    pub fn finish(&mut self) -> Result<(), CheckoutError> {
        let CheckoutStep::CounterConfirmed(confirmation) = &self.step else {
            return Err(CheckoutError::WrongStep(self.step.name()));
        };
        if !confirmation.countdown.is_done() {
            return Err(CheckoutError::CountdownRunning(
                confirmation.countdown.remaining_secs(),
            ));
        }
        self.step = CheckoutStep::Completed;
        Ok(())
    }

    async fn upload_receipt(&self, receipt: ReceiptImage) -> Result<String, ServiceError> {
        let uploader = self
            .services
            .uploader
            .clone()
            .ok_or(ServiceError::NotConfigured("Receipt upload"))?;
        let (max_width, quality) = (self.settings.receipt_max_width, self.settings.receipt_quality);
        let compressed = tokio::task::spawn_blocking(move || {
            compress_receipt(receipt, max_width, quality)
        })
        .await
        .map_err(|e| ServiceError::Rejected(e.to_string()))??;
        uploader.upload(compressed).await
    }

    /// Uploads the receipt if needed, creates the order and builds the
    /// Messenger hand-off. Any failure leaves the session on the payment step
    /// with a notice.
    #[instrument(skip(self))]
    pub async fn place_order(&mut self) -> Result<Redirect, CheckoutError> {
        self.require(&CheckoutStep::Payment)?;

        let mut receipt_url = self.receipt_url.clone();
        let pending = match (&self.receipt, &self.receipt_url) {
            (Some(receipt), None) => Some(receipt.clone()),
            _ => None,
        };
        if let Some(receipt) = pending {
            self.upload_error = None;
            self.notice = Some(notice::UPLOADING_RECEIPT.to_string());

            match self.upload_receipt(receipt).await {
                Ok(url) => {
                    self.receipt_url = Some(url.clone());
                    receipt_url = Some(url);
                    self.notice = Some(notice::RECEIPT_UPLOADED.to_string());
                }
                Err(e) => {
                    let message = e.to_string();
                    warn!(error = %message, "Receipt upload failed");
                    let shown = notice::upload_failed(&message);
                    self.upload_error = Some(message);
                    self.notice = Some(shown.clone());
                    return Err(CheckoutError::UploadFailed(shown));
                }
            }
        }

        let payment_method = self.payment_method.clone();
        let request = self.order_request(&payment_method, receipt_url.clone());
        let placed = self
            .create_order(request, notice::payment_order_failed)
            .await?;
        let order_number = placed.display_number();

        let payment = self
            .selected_payment_method()
            .map_or(payment_method.as_str(), |m| m.name.as_str());
        let message = compose_message(&OrderSummary {
            cafe_name: &self.settings.cafe_name,
            order_number: &order_number,
            customer_name: self.customer_name.trim(),
            service_type: self.service_type,
            lines: &self.lines,
            total: self.total,
            payment,
            receipt_url: receipt_url.as_deref(),
            notes: &self.notes,
        });
        let link = messenger_link(&self.settings.messenger_page_id, &message);

        info!(%order_number, "Redirecting to Messenger");
        let redirect = Redirect {
            order_number,
            message,
            link,
        };
        self.step = CheckoutStep::Redirected(redirect.clone());
        Ok(redirect)
    }
}
