//! Client for the Course actor, including the two relationship operations
//! the bootcamp side depends on: the reverse view and the cascade delete.

use crate::course_actor::CourseError;
use crate::model::{BootcampId, Course, CourseCreate, CourseFilter, CourseId, CourseUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Course actor.
#[derive(Clone)]
pub struct CourseClient {
    inner: ResourceClient<Course>,
}

impl CourseClient {
    pub fn new(inner: ResourceClient<Course>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_course(&self, params: CourseCreate) -> Result<CourseId, CourseError> {
        debug!(title = %params.title, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_course(
        &self,
        id: CourseId,
        update: CourseUpdate,
    ) -> Result<Course, CourseError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// The reverse relationship view: every course referencing the given
    /// bootcamp. Computed per call, never stored, no guaranteed order.
    #[instrument(skip(self))]
    pub async fn courses_for_bootcamp(
        &self,
        bootcamp: BootcampId,
    ) -> Result<Vec<Course>, CourseError> {
        debug!("Sending request");
        self.inner
            .find(CourseFilter::ByBootcamp(bootcamp))
            .await
            .map_err(Self::map_error)
    }

    /// Bulk-delete every course referencing the given bootcamp. Used by the
    /// bootcamp actor's cascade; returns the number of courses removed.
    #[instrument(skip(self))]
    pub async fn delete_for_bootcamp(&self, bootcamp: BootcampId) -> Result<usize, CourseError> {
        debug!("Sending request");
        self.inner
            .delete_many(CourseFilter::ByBootcamp(bootcamp))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Course> for CourseClient {
    type Error = CourseError;

    fn inner(&self) -> &ResourceClient<Course> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> CourseError {
        match e {
            FrameworkError::NotFound(id) => CourseError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<CourseError>() {
                Ok(domain) => *domain,
                Err(other) => CourseError::ActorCommunication(other.to_string()),
            },
            other => CourseError::ActorCommunication(other.to_string()),
        }
    }
}
