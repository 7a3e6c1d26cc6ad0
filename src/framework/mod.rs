//! Generic actor framework for the café's stateful resources.
//!
//! - [`ActorEntity`] - what a resource (menu item, cart, order) must implement
//! - [`ResourceActor`] - the task that owns a resource store
//! - [`ResourceClient`] - cloneable typed handle to an actor
//! - [`ActorClient`] - shared read/delete operations for domain clients
//! - [`FrameworkError`] - plumbing failures
//!
//! See [`mock`] for test doubles.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
