//! # Course Actor
//!
//! Manages [`Course`] entities. Courses have no dependencies of their own
//! (`Context = ()`); the interesting traffic arrives from the outside -
//! the bootcamp actor's cascade delete and the reverse relationship view
//! both address this store through [`CourseFilter::ByBootcamp`](crate::model::CourseFilter).

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Course;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Course actor and its client.
pub fn new() -> (ResourceActor<Course>, ResourceClient<Course>) {
    ResourceActor::new(32)
}
