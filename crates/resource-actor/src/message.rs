//! Message types exchanged between [`ResourceClient`](crate::ResourceClient)
//! and [`ResourceActor`](crate::ResourceActor).
//!
//! The variants standardize on resource lifecycle operations (CRUD plus
//! list/find/bulk-delete) with an `Action` escape hatch for anything
//! resource-specific. Every variant carries a oneshot responder; the actor
//! answers exactly once per request.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a `ResourceActor`. Generic over the entity so the
/// compiler rejects mismatched payloads at the call site.
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
    /// Return every entity matching the filter.
    Find {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    /// Remove every entity matching the filter and report the count.
    /// Bypasses `on_delete` hooks.
    DeleteMany {
        filter: T::Filter,
        respond_to: Response<usize>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
