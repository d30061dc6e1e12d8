//! Bootcamp route handlers.

use super::auth::CurrentUser;
use super::response::{paginate, ItemResponse, ListResponse, Page};
use super::{ApiError, AppState};
use crate::model::{
    Bootcamp, BootcampCreate, BootcampFilter, BootcampId, BootcampUpdate, Career, Course,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use resource_actor::ActorClient;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    /// Optional career filter, matched against each bootcamp's offerings.
    pub career: Option<Career>,
}

/// GET /api/v1/bootcamps
pub async fn list_bootcamps(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Bootcamp>>, ApiError> {
    let mut bootcamps = match query.career {
        Some(career) => state.bootcamps.find(BootcampFilter::Career(career)).await?,
        None => state.bootcamps.list().await?,
    };

    // The store has no inherent order; sort by id so pages are stable.
    bootcamps.sort_by_key(|b| b.id.0);
    Ok(Json(paginate(bootcamps, query.page, query.limit)))
}

/// POST /api/v1/bootcamps
pub async fn create_bootcamp(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(mut params): Json<BootcampCreate>,
) -> Result<(StatusCode, Json<ItemResponse<Bootcamp>>), ApiError> {
    user.require_publisher()?;
    params.user = Some(user.id);

    let id = state.bootcamps.create_bootcamp(params).await?;
    let bootcamp = state
        .bootcamps
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("{id} vanished after creation")))?;

    info!(%id, owner = %user.id, "Bootcamp created");
    Ok((StatusCode::CREATED, Json(ItemResponse::new(bootcamp))))
}

#[derive(Debug, Deserialize)]
pub struct GetQuery {
    /// `?include=courses` embeds the reverse relationship view.
    pub include: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BootcampWithCourses {
    #[serde(flatten)]
    pub bootcamp: Bootcamp,
    pub courses: Vec<Course>,
}

/// GET /api/v1/bootcamps/{id}
pub async fn get_bootcamp(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(query): Query<GetQuery>,
) -> Result<Response, ApiError> {
    let id = BootcampId(id);
    let bootcamp = state
        .bootcamps
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("{id} not found")))?;

    if query.include.as_deref() == Some("courses") {
        let courses = state.courses.courses_for_bootcamp(id).await?;
        let body = ItemResponse::new(BootcampWithCourses { bootcamp, courses });
        return Ok(Json(body).into_response());
    }

    Ok(Json(ItemResponse::new(bootcamp)).into_response())
}

/// PUT /api/v1/bootcamps/{id}
pub async fn update_bootcamp(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<u32>,
    Json(update): Json<BootcampUpdate>,
) -> Result<Json<ItemResponse<Bootcamp>>, ApiError> {
    user.require_publisher()?;
    let bootcamp = state
        .bootcamps
        .update_bootcamp(BootcampId(id), update)
        .await?;
    Ok(Json(ItemResponse::new(bootcamp)))
}

/// DELETE /api/v1/bootcamps/{id}
///
/// Cascades: the actor's delete hook removes the bootcamp's courses before
/// the bootcamp itself goes away.
pub async fn delete_bootcamp(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<u32>,
) -> Result<Json<ItemResponse<serde_json::Value>>, ApiError> {
    user.require_publisher()?;
    let id = BootcampId(id);
    state.bootcamps.delete(id).await?;

    info!(%id, "Bootcamp deleted");
    Ok(Json(ItemResponse::new(serde_json::json!({}))))
}

/// GET /api/v1/bootcamps/radius/{zipcode}/{distance}
///
/// Geocodes the zipcode, then returns every bootcamp within `distance`
/// miles of it.
pub async fn bootcamps_in_radius(
    State(state): State<AppState>,
    Path((zipcode, distance)): Path<(String, f64)>,
) -> Result<Json<ListResponse<Bootcamp>>, ApiError> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(ApiError::Validation(
            "distance must be a positive number of miles".to_string(),
        ));
    }

    let candidates = state
        .geocoder
        .geocode(&zipcode)
        .await
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;
    let center = candidates
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Unprocessable(format!("could not geocode '{zipcode}'")))?;

    let bootcamps = state
        .bootcamps
        .find(BootcampFilter::WithinRadius {
            longitude: center.longitude,
            latitude: center.latitude,
            miles: distance,
        })
        .await?;

    Ok(Json(ListResponse::new(bootcamps)))
}

#[derive(Debug, Deserialize)]
pub struct PhotoBody {
    pub filename: String,
}

/// PUT /api/v1/bootcamps/{id}/photo
pub async fn upload_photo(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<u32>,
    Json(body): Json<PhotoBody>,
) -> Result<Json<ItemResponse<String>>, ApiError> {
    user.require_publisher()?;
    let stored = state.bootcamps.set_photo(BootcampId(id), body.filename).await?;
    Ok(Json(ItemResponse::new(stored)))
}
