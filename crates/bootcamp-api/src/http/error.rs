//! HTTP error envelope: domain errors mapped onto status codes, rendered as
//! `{"success": false, "error": "..."}`.

use crate::bootcamp_actor::BootcampError;
use crate::course_actor::CourseError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("authentication required")]
    Unauthorized,

    #[error("role '{0}' is not authorized for this operation")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// The request was well-formed but a dependency (the geocoding
    /// provider) could not fulfil it.
    #[error("{0}")]
    Unprocessable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "success": false, "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<BootcampError> for ApiError {
    fn from(e: BootcampError) -> Self {
        match e {
            BootcampError::Validation(msg) => ApiError::Validation(msg),
            BootcampError::NotFound(_) => ApiError::NotFound(e.to_string()),
            BootcampError::Conflict(msg) => ApiError::Conflict(msg),
            BootcampError::GeocodingFailed { .. } => ApiError::Unprocessable(e.to_string()),
            BootcampError::CascadeFailed(_) | BootcampError::ActorCommunication(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<CourseError> for ApiError {
    fn from(e: CourseError) -> Self {
        match e {
            CourseError::Validation(msg) => ApiError::Validation(msg),
            CourseError::NotFound(_) => ApiError::NotFound(e.to_string()),
            CourseError::ActorCommunication(_) => ApiError::Internal(e.to_string()),
        }
    }
}
