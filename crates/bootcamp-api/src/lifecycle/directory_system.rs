//! The [`DirectorySystem`] orchestrator.

use crate::bootcamp_actor::{self, BootcampContext};
use crate::clients::{BootcampClient, CourseClient};
use crate::course_actor;
use crate::geocoder::Geocoder;
use std::sync::Arc;
use tracing::{error, info};

/// Runtime orchestrator for the bootcamp directory.
///
/// Responsibilities:
/// - create the Course and Bootcamp actors,
/// - inject the bootcamp actor's dependencies (the geocoding provider and
///   the course client used by the cascade delete),
/// - keep the task handles for graceful shutdown.
///
/// The course actor has no dependencies, so the dependency graph is acyclic
/// and channel-closure shutdown is deterministic.
pub struct DirectorySystem {
    pub bootcamp_client: BootcampClient,
    pub course_client: CourseClient,
    /// The geocoding provider, shared with the radius-search read path.
    pub geocoder: Arc<dyn Geocoder>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DirectorySystem {
    /// Creates and starts the whole system with the given geocoding
    /// provider.
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        // 1. Create actors (no dependencies yet).
        let (course_actor, course_generic) = course_actor::new();
        let (bootcamp_actor, bootcamp_generic) = bootcamp_actor::new();

        let course_client = CourseClient::new(course_generic);
        let bootcamp_client = BootcampClient::new(bootcamp_generic);

        // 2. Start actors with injected context.
        let course_handle = tokio::spawn(course_actor.run(()));
        let bootcamp_handle = tokio::spawn(bootcamp_actor.run(BootcampContext {
            geocoder: geocoder.clone(),
            courses: course_client.clone(),
        }));

        info!("Directory system started");
        Self {
            bootcamp_client,
            course_client,
            geocoder,
            handles: vec![course_handle, bootcamp_handle],
        }
    }

    /// Gracefully shuts down: dropping the clients closes the channels,
    /// each actor drains and exits, then the task handles are awaited.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.bootcamp_client);
        drop(self.course_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {e:?}"));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
