//! # ActorClient Trait
//!
//! Shared read/delete operations for the domain clients (`MenuClient`,
//! `CartClient`, `OrderClient`), built on their inner [`ResourceClient`].

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    /// Maps plumbing failures (and boxed entity errors) to the domain error.
    fn map_error(e: FrameworkError) -> Self::Error;

    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
