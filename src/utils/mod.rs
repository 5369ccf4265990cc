//! Utility functions shared across layers.
//!
//! - [`validation`] - Slug/target rules and slug generation
//! - [`db_error`] - SQLx error translation

pub mod db_error;
pub mod validation;
