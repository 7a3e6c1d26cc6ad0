//! Custom actions for the cart actor.

use crate::model::{CartAddition, LineId};

/// Everything a customer can do to their cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Adds an item, merging with a line that has the same selection.
    Add(CartAddition),
    /// Sets a line's quantity; zero removes the line.
    UpdateQuantity { line_id: LineId, quantity: u32 },
    Increment(LineId),
    /// Decrementing a line of one removes it.
    Decrement(LineId),
    Remove(LineId),
    Clear,
}

/// Results from CartActions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartActionResult {
    /// The line that now holds the added item.
    Added(LineId),
    /// New quantity of the line, `None` once it has been removed.
    Quantity(Option<u32>),
    Removed,
    Cleared,
}
