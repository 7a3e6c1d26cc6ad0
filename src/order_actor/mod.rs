//! # Order Actor
//!
//! The in-process order desk: accepts [`OrderRequest`](crate::model::OrderRequest)s,
//! reserves stock through the menu actor and numbers orders sequentially.
//! [`ActorOrderService`](crate::services::ActorOrderService) puts it behind the
//! same seam as the REST order API.
//!
//! ```rust,ignore
//! let (order_actor, generic_client) = order_actor::new();
//! tokio::spawn(order_actor.run(menu_client.clone()));
//! let orders = OrderClient::new(generic_client);
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new order actor and its client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}
