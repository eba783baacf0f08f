//! # campus-core
//!
//! Core types for Campus, the academic-records admin client.
//!
//! This crate provides the types shared across all Campus crates:
//! - Entity structs for the backend's domain objects (students, modules,
//!   registrations, grades, operation log)
//! - Operation-log enums with wire-format serialization
//! - CLI response types
//!
//! All entities are owned by the backend; the client holds ephemeral,
//! read-mostly copies fetched per command and discarded on exit. Wire
//! field names are camelCase and are mapped via serde renames.

pub mod entities;
pub mod enums;
pub mod responses;
