//! Resource-specific actions for the Bootcamp actor.

/// Operations that don't fit the CRUD shape.
#[derive(Debug, Clone)]
pub enum BootcampAction {
    /// Record an uploaded photo's filename. The file transport itself is
    /// handled outside this core; only the filename is stored.
    SetPhoto(String),
}

/// Results of [`BootcampAction`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum BootcampActionResult {
    /// The photo filename now stored on the bootcamp.
    PhotoSet(String),
}
