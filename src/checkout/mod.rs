//! # Checkout
//!
//! Two steps over a cart snapshot: customer details, then payment. From the
//! details step the customer may instead confirm and pay at the counter.
//!
//! ```text
//! Details --proceed_to_payment--> Payment --place_order--> Redirected
//! Details --confirm_at_counter--> CounterConfirmed --finish--> Completed
//! Payment --back--> Details --back--> Exited
//! ```
//!
//! Placing an order uploads the receipt (if any), creates the order through
//! the [`OrderService`](crate::services::OrderService) and ends with a
//! Messenger deep link carrying the order summary.

pub mod confirmation;
pub mod message;
pub mod notice;
pub mod session;

pub use confirmation::{Countdown, CounterConfirmation};
pub use message::{compose_message, messenger_link, OrderSummary};
pub use session::{CheckoutSession, CheckoutStep, Redirect};

use crate::services::{OrderService, PaymentMethodSource, ReceiptUploader};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PAYMENT_METHOD: &str = "gcash";
pub const COUNTER_PAYMENT_METHOD: &str = "counter";
pub const DEFAULT_MESSENGER_PAGE_ID: &str = "61579693577478";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Please enter your name")]
    MissingCustomerName,

    #[error("Not possible from the {0} step")]
    WrongStep(&'static str),

    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Carries the notice shown to the customer.
    #[error("{0}")]
    UploadFailed(String),

    /// Carries the notice shown to the customer.
    #[error("{0}")]
    OrderFailed(String),

    #[error("Please wait {0}s")]
    CountdownRunning(u64),
}

/// The services a checkout talks to.
#[derive(Clone)]
pub struct CheckoutServices {
    pub orders: Arc<dyn OrderService>,
    /// Without an uploader, attached receipts cannot be sent.
    pub uploader: Option<Arc<dyn ReceiptUploader>>,
    pub payment_methods: Arc<dyn PaymentMethodSource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    pub cafe_name: String,
    pub messenger_page_id: String,
    pub receipt_max_width: u32,
    /// JPEG quality, 1-100.
    pub receipt_quality: u8,
    pub counter_countdown: Duration,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            cafe_name: "Acir Cafe".to_string(),
            messenger_page_id: DEFAULT_MESSENGER_PAGE_ID.to_string(),
            receipt_max_width: 1200,
            receipt_quality: 80,
            counter_countdown: Duration::from_secs(5),
        }
    }
}
