//! Error types for the order actor.

use crate::menu_actor::MenuError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// Stock reservation failed. The menu's message is kept verbatim so
    /// "Insufficient stock for ..." reaches the customer.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
