//! The generic actor server: owns the store for one entity type and
//! processes requests sequentially.
//!
//! Because each actor is the sole owner of its store and handles one message
//! at a time, there is no locking anywhere in the runtime. Concurrency comes
//! from running many actors, each in its own Tokio task.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The server half of a resource actor.
///
/// # Create pipeline
///
/// 1. Allocate the next id.
/// 2. `from_create_params` - synchronous validation; a bad payload never
///    reaches a hook.
/// 3. Uniqueness check via `conflicts_with` against every stored entity.
/// 4. `on_create` - async enrichment. While this hook is awaited the actor
///    processes nothing else; a slow collaborator stalls the whole actor
///    (no timeout is imposed here).
/// 5. Insert into the store and return the id.
///
/// A failure at any step aborts the create; the store is untouched.
///
/// # Update pipeline
///
/// `on_update` runs on a clone of the stored entity, then `conflicts_with`
/// is re-checked against every other entity (the entity never conflicts
/// with its own stored copy). Only when both succeed is the clone swapped
/// in, so a failed hook or a conflicting rename leaves the store untouched.
///
/// # Delete pipeline
///
/// `on_delete` runs first (the cascade point). Only if it succeeds is the
/// entity removed, so a failed cascade leaves the entity in place.
///
/// # Bulk operations
///
/// `Find` and `DeleteMany` evaluate the entity's `matches` predicate over
/// the whole store. `DeleteMany` does **not** run `on_delete` hooks; callers
/// that need cascade semantics must delete entities one at a time.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the mpsc channel capacity; senders wait when it is
    /// full. The actor does nothing until [`run`](Self::run) is awaited
    /// (typically inside `tokio::spawn`).
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to every lifecycle hook; this is where clients of
    /// other actors and external collaborators get injected.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Some(reason) =
                                self.store.values().find_map(|e| item.conflicts_with(e))
                            {
                                warn!(entity_type, %id, reason, "Create conflict");
                                let _ = respond_to.send(Err(FrameworkError::Conflict(reason)));
                                continue;
                            }
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let items: Vec<T> = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(existing) = self.store.get(&id) {
                        // The hook runs on a clone; the store only sees an
                        // entity that also passed the uniqueness re-check.
                        let mut item = existing.clone();
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        if let Some(reason) = self
                            .store
                            .iter()
                            .filter(|(other_id, _)| **other_id != id)
                            .find_map(|(_, other)| item.conflicts_with(other))
                        {
                            warn!(entity_type, %id, reason, "Update conflict");
                            let _ = respond_to.send(Err(FrameworkError::Conflict(reason)));
                            continue;
                        }
                        self.store.insert(id.clone(), item.clone());
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Find { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, matched = items.len(), "Find");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::DeleteMany { filter, respond_to } => {
                    let before = self.store.len();
                    self.store.retain(|_, item| !item.matches(&filter));
                    let removed = before - self.store.len();
                    info!(entity_type, ?filter, removed, size = self.store.len(), "DeleteMany");
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
