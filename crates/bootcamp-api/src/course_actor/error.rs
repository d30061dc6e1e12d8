//! Error type for course operations.

#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("{0}")]
    Validation(String),
    #[error("course not found: {0}")]
    NotFound(String),
    #[error("actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for CourseError {
    fn from(msg: String) -> Self {
        Self::ActorCommunication(msg)
    }
}
