//! # Menu Actor
//!
//! Owns the café menu: items, their prices and their stock.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`]
//! - [`actions`] - [`MenuAction`] and [`MenuActionResult`] for stock bookkeeping
//!
//! ```rust,ignore
//! let (actor, generic_client) = menu_actor::new();
//! let menu = MenuClient::new(generic_client);
//! tokio::spawn(actor.run(()));
//!
//! let id = menu.create_item(MenuItemCreate::new("Latte", "coffee", dec!(150))).await?;
//! menu.reserve_stock(id, 2).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::MenuItem;

/// Creates a new menu actor and its client.
pub fn new() -> (ResourceActor<MenuItem>, ResourceClient<MenuItem>) {
    ResourceActor::new(32)
}
