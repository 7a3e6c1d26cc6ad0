//! # Cart Actor
//!
//! One cart per customer session. Items are added by id; the cart looks the
//! item up through its injected [`MenuClient`](crate::clients::MenuClient)
//! and prices the line itself.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Cart;

/// Creates a new cart actor and its client.
pub fn new() -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(32)
}
