//! The [`ActorEntity`] trait: the contract a resource type implements to be
//! managed by a [`ResourceActor`](crate::ResourceActor).
//!
//! Associated types pin down the full vocabulary of a resource (id, create
//! and update payloads, query filter, custom actions, injected context,
//! error type), so a client can never send the wrong payload to the wrong
//! actor. Lifecycle hooks are async so they can call out to collaborators -
//! other actors' clients, or external services injected via `Context`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Contract for resource types managed by a `ResourceActor`.
///
/// The error type is per-entity rather than per-operation: one enum covers
/// every failure the entity can produce, which keeps client signatures and
/// pattern matching simple.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. Must be constructible from `u32` so the actor can
    /// generate ids from its internal counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Query filter understood by [`matches`](Self::matches). Drives both
    /// `find` and `delete_many`. Use `()` if the resource is never queried.
    type Filter: Send + Sync + Debug;

    /// Resource-specific operations that don't fit the CRUD shape.
    type Action: Send + Sync + Debug;

    /// Result type of custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook via `run(context)`.
    /// Use `()` if the resource has none.
    type Context: Send + Sync;

    /// Per-entity error type, boxed into
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError)
    /// when a hook fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from the generated id and the create payload.
    /// This is the synchronous validation stage: reject malformed payloads
    /// here, before any hook runs.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Store-level uniqueness check. The actor calls this for a candidate
    /// entity against every stored entity before `on_create`, and again
    /// after `on_update` against every other entity (the candidate is never
    /// compared with its own stored copy); returning `Some(reason)` rejects
    /// the write with
    /// [`FrameworkError::Conflict`](crate::FrameworkError::Conflict).
    fn conflicts_with(&self, _existing: &Self) -> Option<String> {
        None
    }

    /// Predicate for `find` and `delete_many`.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    // --- Lifecycle hooks ---

    /// Runs after construction and the uniqueness check, before the entity
    /// is inserted into the store. Enrichment and cross-actor validation
    /// belong here; an error aborts the create and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload. The actor runs this on a clone of the
    /// stored entity and swaps it in only on success, so partial mutation
    /// on failure never reaches the store.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the entity is removed. This is the cascade point: delete
    /// dependent records here. An error aborts the removal and the entity
    /// stays in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
