//! HTTP surface: the axum router, auth boundary, and response envelopes.
//!
//! Handlers stay thin - they authenticate, shape payloads, and delegate to
//! the domain clients; every lifecycle rule lives in the actors.

pub mod auth;
pub mod bootcamps;
pub mod courses;
pub mod error;
pub mod response;

pub use error::ApiError;

use crate::clients::{BootcampClient, CourseClient};
use crate::geocoder::Geocoder;
use crate::lifecycle::DirectorySystem;
use axum::routing::{get, put};
use axum::Router;
use std::sync::Arc;

/// Shared handler state: the domain clients plus the geocoder, which the
/// radius search uses directly on the read path.
#[derive(Clone)]
pub struct AppState {
    pub bootcamps: BootcampClient,
    pub courses: CourseClient,
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    pub fn from_system(system: &DirectorySystem) -> Self {
        Self {
            bootcamps: system.bootcamp_client.clone(),
            courses: system.course_client.clone(),
            geocoder: system.geocoder.clone(),
        }
    }
}

/// Builds the full route table.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/bootcamps",
            get(bootcamps::list_bootcamps).post(bootcamps::create_bootcamp),
        )
        .route(
            "/api/v1/bootcamps/{id}",
            get(bootcamps::get_bootcamp)
                .put(bootcamps::update_bootcamp)
                .delete(bootcamps::delete_bootcamp),
        )
        .route(
            "/api/v1/bootcamps/radius/{zipcode}/{distance}",
            get(bootcamps::bootcamps_in_radius),
        )
        .route(
            "/api/v1/bootcamps/{id}/photo",
            put(bootcamps::upload_photo),
        )
        .route(
            "/api/v1/bootcamps/{id}/courses",
            get(courses::list_bootcamp_courses).post(courses::create_bootcamp_course),
        )
        .with_state(state)
}
