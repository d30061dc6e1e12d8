//! Course sub-resource handlers, always scoped under a bootcamp.

use super::auth::CurrentUser;
use super::response::{ItemResponse, ListResponse};
use super::{ApiError, AppState};
use crate::model::{BootcampId, Course, CourseCreate};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use resource_actor::ActorClient;
use tracing::info;

/// GET /api/v1/bootcamps/{id}/courses
pub async fn list_bootcamp_courses(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ListResponse<Course>>, ApiError> {
    let id = ensure_bootcamp_exists(&state, id).await?;
    let courses = state.courses.courses_for_bootcamp(id).await?;
    Ok(Json(ListResponse::new(courses)))
}

/// POST /api/v1/bootcamps/{id}/courses
///
/// The owning bootcamp comes from the path, never from the body.
pub async fn create_bootcamp_course(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<u32>,
    Json(mut params): Json<CourseCreate>,
) -> Result<(StatusCode, Json<ItemResponse<Course>>), ApiError> {
    user.require_publisher()?;
    let bootcamp = ensure_bootcamp_exists(&state, id).await?;
    params.bootcamp = Some(bootcamp);

    let course_id = state.courses.create_course(params).await?;
    let course = state
        .courses
        .get(course_id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("{course_id} vanished after creation")))?;

    info!(%course_id, %bootcamp, "Course created");
    Ok((StatusCode::CREATED, Json(ItemResponse::new(course))))
}

async fn ensure_bootcamp_exists(state: &AppState, id: u32) -> Result<BootcampId, ApiError> {
    let id = BootcampId(id);
    state
        .bootcamps
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("{id} not found")))?;
    Ok(id)
}
