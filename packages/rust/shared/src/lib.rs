//! Shared types and error model for Docshelf.
//!
//! This crate is the foundation depended on by the rest of the workspace.
//! It provides:
//! - [`DocshelfError`] — the unified error type
//! - Domain types ([`Subtopic`], [`Topic`], [`TopicMeta`])

pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use error::{DocshelfError, Result};
pub use types::{Subtopic, Topic, TopicMeta};
