//! Pure data structures. [`MenuItem`], [`Cart`] and [`Order`] implement the
//! [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod cart;
pub mod menu_item;
pub mod order;
pub mod payment;

pub use cart::*;
pub use menu_item::*;
pub use order::*;
pub use payment::*;
