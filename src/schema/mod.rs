//! Schema module for Hunt.
//!
//! A [`SearchSchema`] declares which fields of a record type are searchable
//! and under which name their terms are stored.

#[allow(clippy::module_inception)]
pub mod schema;

pub use schema::*;
