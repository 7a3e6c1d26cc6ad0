//! # Lifecycle
//!
//! Starting, wiring and stopping the café's actors.
//!
//! Actors are created without their dependencies and receive them when they
//! start running, through the entity's `Context`:
//!
//! ```rust,ignore
//! impl ActorEntity for MenuItem { type Context = (); }
//! impl ActorEntity for Cart { type Context = MenuClient; }
//! impl ActorEntity for Order { type Context = MenuClient; }
//! ```
//!
//! ## Shutdown
//!
//! Dropping the last client closes an actor's channel; its run loop sees
//! `None`, logs its final size and returns. The dependency graph is acyclic
//! (cart and order desk point at the menu, the menu points nowhere), so
//! [`CafeSystem::shutdown`] only has to drop its clients and await the tasks.

pub mod cafe_system;
pub mod tracing;

pub use cafe_system::*;
pub use tracing::*;
