//! System orchestration: creating the actors, wiring their dependencies,
//! and shutting everything down cleanly.

pub mod directory_system;

pub use directory_system::DirectorySystem;
