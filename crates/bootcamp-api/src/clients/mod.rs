//! High-level, domain-typed clients over the generic resource clients.
//! These are what the HTTP handlers and other actors' contexts hold.

pub mod bootcamp_client;
pub mod course_client;

pub use bootcamp_client::BootcampClient;
pub use course_client::CourseClient;
