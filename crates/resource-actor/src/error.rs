//! Common error types for the framework. Entity-specific failures are boxed
//! into [`FrameworkError::EntityError`] so the transport layer stays generic
//! while clients can downcast back to the domain error.

/// Errors produced by the actor runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A create was rejected by [`conflicts_with`](crate::ActorEntity::conflicts_with).
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
