//! # Bootcamp Actor
//!
//! Manages [`Bootcamp`] entities. This is the actor with the interesting
//! lifecycle: creates run a slug-derivation stage and then a geocoding
//! stage before anything is stored, updates are applied atomically, and
//! deletes cascade to the owned courses through the injected
//! [`CourseClient`](crate::clients::CourseClient).
//!
//! ## Structure
//!
//! - [`entity`] - `ActorEntity` implementation (the pipelines live here)
//! - [`actions`] - `BootcampAction` for the photo-filename operation
//! - [`error`] - [`BootcampError`]
//! - [`new()`] - factory for the actor and its generic client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::BootcampContext;
pub use error::*;

use crate::model::Bootcamp;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Bootcamp actor and its client. The actor is inert until
/// `run(context)` is spawned with a [`BootcampContext`].
pub fn new() -> (ResourceActor<Bootcamp>, ResourceClient<Bootcamp>) {
    ResourceActor::new(32)
}
