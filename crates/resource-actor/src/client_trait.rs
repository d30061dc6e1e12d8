//! The [`ActorClient`] trait: shared plumbing for resource-specific client
//! wrappers. Wrappers hold a `ResourceClient<T>`, declare how framework
//! errors map into their domain error, and inherit the standard read and
//! delete operations for free.

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Standard operations for domain client wrappers.
///
/// Implementors provide `inner()` and `map_error`; `get`, `delete`, `list`,
/// `find` and `delete_many` come as defaults. Domain-specific methods
/// (custom creates, actions) stay on the wrapper itself.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors into the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by id, running its `on_delete` hook.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// List all entities.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Find entities matching a filter.
    #[tracing::instrument(skip(self, filter))]
    async fn find(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(filter).await.map_err(Self::map_error)
    }

    /// Bulk-delete entities matching a filter. Bypasses `on_delete` hooks.
    #[tracing::instrument(skip(self, filter))]
    async fn delete_many(&self, filter: T::Filter) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .delete_many(filter)
            .await
            .map_err(Self::map_error)
    }
}
