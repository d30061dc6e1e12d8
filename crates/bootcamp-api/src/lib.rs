//! Bootcamp directory service.
//!
//! A REST backend for a directory of coding bootcamps and their courses,
//! built on the `resource-actor` framework: each resource lives in its own
//! actor, lifecycle rules (slug derivation, geocoding, cascade deletes) run
//! inside the entity hooks, and the axum layer stays a thin shell over the
//! domain clients.
//!
//! Composition:
//! - [`model`]: domain types and validation.
//! - [`bootcamp_actor`] / [`course_actor`]: entity behaviour per resource.
//! - [`clients`]: typed wrappers over the generic actor clients.
//! - [`geocoder`]: the address-resolution boundary, injected as a trait.
//! - [`lifecycle`]: system startup, dependency wiring, shutdown.
//! - [`http`]: routes, auth, and response envelopes.

pub mod bootcamp_actor;
pub mod clients;
pub mod config;
pub mod course_actor;
pub mod geocoder;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod slug;
