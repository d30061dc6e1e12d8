//! Error type for bootcamp operations.

/// Everything a bootcamp operation can fail with. One enum for the whole
/// actor keeps client signatures simple; the HTTP layer maps variants to
/// status codes.
#[derive(Debug, thiserror::Error)]
pub enum BootcampError {
    #[error("{0}")]
    Validation(String),
    #[error("bootcamp not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    /// The provider errored or returned zero candidates. Always fatal to
    /// the enclosing save; a bootcamp is never stored without a location.
    #[error("could not geocode '{address}': {reason}")]
    GeocodingFailed { address: String, reason: String },
    /// The bulk delete of dependent courses failed; the bootcamp removal
    /// was aborted.
    #[error("cascade delete of courses failed: {0}")]
    CascadeFailed(String),
    #[error("actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for BootcampError {
    fn from(msg: String) -> Self {
        Self::ActorCommunication(msg)
    }
}
