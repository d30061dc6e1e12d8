//! Client for the Bootcamp actor.
//!
//! Framework errors are mapped back into [`BootcampError`] with variant
//! fidelity: `NotFound`/`Conflict` survive, and entity errors boxed by the
//! actor are downcast back to the domain type so callers (and the HTTP
//! layer's status mapping) see the original failure, not a stringified one.

use crate::bootcamp_actor::{BootcampAction, BootcampActionResult, BootcampError};
use crate::model::{Bootcamp, BootcampCreate, BootcampId, BootcampUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Bootcamp actor.
#[derive(Clone)]
pub struct BootcampClient {
    inner: ResourceClient<Bootcamp>,
}

impl BootcampClient {
    pub fn new(inner: ResourceClient<Bootcamp>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_bootcamp(
        &self,
        params: BootcampCreate,
    ) -> Result<BootcampId, BootcampError> {
        debug!(name = %params.name, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_bootcamp(
        &self,
        id: BootcampId,
        update: BootcampUpdate,
    ) -> Result<Bootcamp, BootcampError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Record a photo filename on a bootcamp.
    #[instrument(skip(self))]
    pub async fn set_photo(
        &self,
        id: BootcampId,
        filename: String,
    ) -> Result<String, BootcampError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(id, BootcampAction::SetPhoto(filename))
            .await
            .map_err(Self::map_error)?;
        let BootcampActionResult::PhotoSet(stored) = result;
        Ok(stored)
    }
}

#[async_trait]
impl ActorClient<Bootcamp> for BootcampClient {
    type Error = BootcampError;

    fn inner(&self) -> &ResourceClient<Bootcamp> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> BootcampError {
        match e {
            FrameworkError::NotFound(id) => BootcampError::NotFound(id),
            FrameworkError::Conflict(reason) => BootcampError::Conflict(reason),
            FrameworkError::EntityError(inner) => match inner.downcast::<BootcampError>() {
                Ok(domain) => *domain,
                Err(other) => BootcampError::ActorCommunication(other.to_string()),
            },
            other => BootcampError::ActorCommunication(other.to_string()),
        }
    }
}
