//! Error type shared by the external-service seams.

use crate::order_actor::OrderError;
use thiserror::Error;

/// Errors from the order, upload and payment-method services.
///
/// `Display` is what the checkout matches its notices against, so server
/// messages are kept verbatim.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service answered with an error message.
    #[error("{0}")]
    Rejected(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unsupported receipt type: {0}")]
    UnsupportedReceipt(String),

    #[error("Could not process image: {0}")]
    Image(#[from] image::ImageError),

    /// The in-process order desk refused the order.
    #[error("{0}")]
    Order(#[from] OrderError),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}
