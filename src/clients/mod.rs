//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod cart_client;
pub mod menu_client;
pub mod order_client;

pub use cart_client::*;
pub use menu_client::*;
pub use order_client::*;
