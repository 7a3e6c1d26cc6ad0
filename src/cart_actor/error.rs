//! Error types for the cart actor.

use crate::menu_actor::MenuError;
use crate::model::LineId;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested cart was not found.
    #[error("Cart not found: {0}")]
    NotFound(String),

    #[error("Cart line not found: {0}")]
    LineNotFound(LineId),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("{0} is currently unavailable")]
    ItemUnavailable(String),

    #[error("{item} has no variation {variation}")]
    UnknownVariation { item: String, variation: String },

    #[error("{item} has no add-on {add_on}")]
    UnknownAddOn { item: String, add_on: String },

    /// The menu actor refused or failed a lookup.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
