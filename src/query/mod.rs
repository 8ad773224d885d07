//! Query module for Hunt.
//!
//! Search text becomes a [`Predicate`] over the stored term index. Predicates
//! can be evaluated against documents in memory or rendered as a JSON filter
//! for a document store.

pub mod builder;
pub mod predicate;

pub use builder::*;
pub use predicate::*;
