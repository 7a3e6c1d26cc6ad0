//! Custom actions for the menu actor.
//!
//! Stock bookkeeping on a [`MenuItem`](crate::model::MenuItem), handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

/// Stock operations beyond CRUD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Reads the stock level without changing it.
    CheckStock,
    /// Takes `n` units out of stock.
    ///
    /// # Errors
    /// Fails when the item is unavailable or tracked stock is below `n`.
    ReserveStock(u32),
    /// Puts `n` previously reserved units back.
    ReleaseStock(u32),
}

/// Results from MenuActions - variants match 1:1 with MenuAction.
///
/// Each carries the stock level afterwards, `None` when the item does not
/// track inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuActionResult {
    CheckStock(Option<u32>),
    ReserveStock(Option<u32>),
    ReleaseStock(Option<u32>),
}
