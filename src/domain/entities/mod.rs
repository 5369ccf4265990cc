//! Core domain entities.
//!
//! The service has a single entity, [`Link`], with [`NewLink`] as its
//! insertion input.

pub mod link;

pub use link::{Link, NewLink};
