//! Domain model: the Bootcamp and Course entities, their identifiers, and
//! the create/update payloads the actors accept.

pub mod bootcamp;
pub mod course;

pub use bootcamp::{
    Bootcamp, BootcampCreate, BootcampFilter, BootcampId, BootcampUpdate, Career, GeometryKind,
    Location, UserId, DEFAULT_PHOTO,
};
pub use course::{Course, CourseCreate, CourseFilter, CourseId, CourseUpdate, Skill};
