//! Built-in entry registry.
//!
//! Each submodule is an independently authored listing of raw subtopic
//! records. Nothing here validates or reorders anything; the listings are
//! consumed unchanged by the build pipeline, which is the only place
//! invariants are enforced.

mod authoring;
mod getting_started;
mod reference;

use tracing::instrument;

use docshelf_shared::{Result, TopicMeta};

use crate::builder;
use crate::index::Catalog;

/// Assemble the built-in catalog from the authored listings.
///
/// This is a factory, not an ambient global: callers own the returned
/// catalog and decide where it lives. Rebuilding for tests or hot reload is
/// just calling this again and swapping the reference.
#[instrument]
pub fn builtin_catalog() -> Result<Catalog> {
    let getting_started = builder::build_topic(
        &TopicMeta::new("getting-started", "Getting Started"),
        getting_started::subtopics(),
    )?;

    let authoring = builder::build_topic(
        &TopicMeta::new("authoring", "Authoring"),
        authoring::subtopics(),
    )?;

    let reference = builder::build_flattened_category_topic(
        &TopicMeta::new("reference", "Reference"),
        reference::subtopics(),
    )?;

    builder::build_catalog(vec![getting_started, authoring, reference])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
