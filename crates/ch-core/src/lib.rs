//! ch-core: Shared types for the campus helper.
//!
//! This crate has zero internal crate dependencies and defines the
//! document, result and configuration types used by the search and CLI crates.

pub mod bundle;
pub mod config;
pub mod document;
pub mod summary;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {0}")]
    NotFound(String),
    #[error("failed to read data file: {0}")]
    Io(String),
    #[error("invalid JSON: {0}")]
    Parse(String),
}

/// Returned when a front-end passes a tab name `CategoryFilter` does not know.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category filter: {0}")]
pub struct UnknownCategory(pub String);

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::bundle::{CategoryFilter, ResultBundle};
    pub use crate::config::AssistantConfig;
    pub use crate::document::{is_empty_value, Document};
    pub use crate::summary::DocumentSummary;
    pub use crate::{LoadError, UnknownCategory};
}
