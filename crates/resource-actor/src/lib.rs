//! # Resource Actor
//!
//! Building blocks for managing stateful resources as actors. Each resource
//! type gets a [`ResourceActor`] that owns an in-memory store and processes
//! requests sequentially over a Tokio mpsc channel, and a [`ResourceClient`]
//! that exposes a typed async API for the standard operations.
//!
//! ## Layers
//!
//! 1. **Entity layer** ([`ActorEntity`]) - domain types, validation, and
//!    lifecycle hooks (`on_create`, `on_update`, `on_delete`).
//! 2. **Runtime layer** ([`ResourceActor`]) - message processing. One actor
//!    per entity type, one message at a time, no locks.
//! 3. **Interface layer** ([`ResourceClient`], [`ActorClient`]) - type-safe
//!    request/response plumbing over mpsc + oneshot channels.
//!
//! ## Lifecycle pipelines
//!
//! The actor turns the usual implicit ORM hook chain into explicit, ordered
//! steps:
//!
//! - **Create**: allocate id → `from_create_params` (validation) →
//!   uniqueness check ([`ActorEntity::conflicts_with`]) → `on_create`
//!   (async enrichment; a failure here aborts the create and nothing is
//!   stored) → insert.
//! - **Update**: clone → `on_update` → uniqueness re-check against every
//!   other entity → swap the clone in. A hook failure or a conflicting
//!   rename leaves the stored entity untouched.
//! - **Delete**: `on_delete` (the cascade point; a failure aborts the
//!   removal) → remove.
//!
//! ## Queries and bulk deletes
//!
//! Entities declare a [`ActorEntity::Filter`] type and a `matches` predicate.
//! `find(filter)` returns every matching entity; `delete_many(filter)`
//! removes them in one message. Note that `delete_many` does **not** run
//! `on_delete` hooks - cascades only fire on the single-entity delete path.
//!
//! ## Context injection
//!
//! Dependencies (other clients, external collaborators) are injected when
//! the actor starts, via `run(context)`, and handed to every hook. This late
//! binding keeps construction free of circular references.
//!
//! ## Testing
//!
//! [`mock::MockClient`] implements the same wire protocol as a real actor
//! but answers from a queue of expectations, so client and hook logic can be
//! tested without spawning the dependency actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
