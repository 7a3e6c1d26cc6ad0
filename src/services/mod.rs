//! # External Services
//!
//! The checkout talks to three services through async traits, so the REST
//! implementations and the in-process order desk are interchangeable:
//!
//! | Seam | Implementations |
//! |---|---|
//! | [`OrderService`] | [`RestOrderService`], [`ActorOrderService`] |
//! | [`ReceiptUploader`] | [`CloudinaryUploader`] |
//! | [`PaymentMethodSource`] | [`RestPaymentMethods`], [`StaticPaymentMethods`] |

pub mod desk;
pub mod error;
pub mod http;
pub mod payment_methods;
pub mod receipt;

pub use desk::ActorOrderService;
pub use error::ServiceError;
pub use http::{ApiClient, RestOrderService, RestPaymentMethods};
pub use payment_methods::StaticPaymentMethods;
pub use receipt::{compress_receipt, CloudinaryUploader, ReceiptImage, ACCEPTED_RECEIPT_TYPES};

use crate::model::{OrderRequest, PaymentMethodInfo, PlacedOrder};
use async_trait::async_trait;

/// Persists orders.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn create_order(&self, request: OrderRequest) -> Result<PlacedOrder, ServiceError>;
}

/// Hosts receipt images, returning their public URL.
#[async_trait]
pub trait ReceiptUploader: Send + Sync {
    async fn upload(&self, receipt: ReceiptImage) -> Result<String, ServiceError>;
}

/// Lists the payment methods a customer can choose from.
#[async_trait]
pub trait PaymentMethodSource: Send + Sync {
    /// Active methods, in ascending sort order.
    async fn payment_methods(&self) -> Result<Vec<PaymentMethodInfo>, ServiceError>;
}

pub(crate) fn active_sorted(mut methods: Vec<PaymentMethodInfo>) -> Vec<PaymentMethodInfo> {
    methods.retain(|m| m.active);
    methods.sort_by_key(|m| m.sort_order);
    methods
}
