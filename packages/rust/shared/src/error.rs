//! Error types for Docshelf.
//!
//! All crates use [`DocshelfError`] via `thiserror`. The build-time variants
//! ([`MissingField`](DocshelfError::MissingField),
//! [`DuplicateId`](DocshelfError::DuplicateId)) are fatal: they abort catalog
//! construction so a malformed catalog value never exists. The query-time
//! variant ([`NotFound`](DocshelfError::NotFound)) is recoverable and left to
//! the caller to degrade gracefully (e.g. render a not-found state).

/// Top-level error type for all Docshelf operations.
#[derive(Debug, thiserror::Error)]
pub enum DocshelfError {
    /// A record lacks a required field (empty string in the schema).
    #[error("record `{record}`: missing required field `{field}`")]
    MissingField {
        /// Best available label for the offending record.
        record: String,
        field: &'static str,
    },

    /// Two records share an identifier within the given scope.
    #[error("duplicate {scope} id `{id}`")]
    DuplicateId {
        /// Where the collision was detected: `"topic"`, `"subtopic"`, or
        /// `"catalog-wide subtopic"`.
        scope: &'static str,
        id: String,
    },

    /// A query referenced an id with no matching entry.
    #[error("no {kind} with id `{id}`")]
    NotFound { kind: &'static str, id: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocshelfError>;

impl DocshelfError {
    /// Create a missing-field error for the given record label.
    pub fn missing_field(record: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            record: record.into(),
            field,
        }
    }

    /// Create a duplicate-id error scoped to topics, subtopics, or the catalog.
    pub fn duplicate_id(scope: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            scope,
            id: id.into(),
        }
    }

    /// Create a not-found error for a query miss.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}
