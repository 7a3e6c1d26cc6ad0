//! # Generic Messages
//!
//! Requests travelling from a [`ResourceClient`](crate::framework::ResourceClient)
//! to its [`ResourceActor`](crate::framework::ResourceActor). Every request
//! carries a oneshot sender the actor answers on.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// CRUD + List + Action requests understood by every resource actor.
///
/// - **Create** allocates an id and builds the entity from [`ActorEntity::Create`].
/// - **Get** returns a snapshot of one entity.
/// - **List** returns snapshots of every entity, in id order. Menu browsing
///   is built on this.
/// - **Update** applies an [`ActorEntity::Update`] payload.
/// - **Delete** removes the entity.
/// - **Action** runs a resource-specific [`ActorEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
