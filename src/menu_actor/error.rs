//! Error types for the menu actor.

use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// The item is switched off on the menu.
    #[error("{0} is currently unavailable")]
    Unavailable(String),

    /// The requested quantity exceeds the tracked stock.
    #[error("Insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// The create or update payload is invalid.
    #[error("Invalid menu item: {0}")]
    Invalid(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
