//! # ActorEntity Trait
//!
//! The contract every café resource (menu item, cart, order) implements to be
//! managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Associated types tie each resource to its own payloads: a `Cart` only
//! accepts a `CartCreate`, a `MenuItem` only a `MenuItemCreate`, and the
//! compiler rejects anything else.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to
//! `Ok(())`. Override them when a resource needs to consult its context
//! (e.g. the order desk reserving stock through the menu actor).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier of the entity. Built from the actor's sequential `u32`
    /// counter and ordered so listings come back in creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `ReserveStock`, `AddItem`).
    type Action: Send + Sync + Debug;

    /// Result of a custom action.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at `run()` time. Use `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per actor rather than one per message.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its freshly allocated id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the entity is stored. Returning an
    /// error aborts the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
