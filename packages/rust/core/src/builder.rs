//! Catalog builder.
//!
//! Assembles `Topic`s from ordered author listings, derives the flattened
//! category topic, and wires validated topics into an indexed [`Catalog`].
//! All failures here are construction-time: a malformed catalog value is
//! never handed to callers.

use std::collections::HashSet;

use tracing::{debug, instrument};

use docshelf_shared::{DocshelfError, Result, Subtopic, Topic, TopicMeta};

use crate::index::Catalog;

/// Construct a topic by attaching `subtopics` to `meta` in the given order.
///
/// Fails with `MissingField` if any record has an empty `id`, `title`, or
/// `content`, and with `DuplicateId` if two records share an id.
#[instrument(skip_all, fields(topic = %meta.id, subtopics = subtopics.len()))]
pub fn build_topic(meta: &TopicMeta, subtopics: Vec<Subtopic>) -> Result<Topic> {
    validate_listing(&subtopics)?;
    debug!("topic assembled in author order");

    Ok(Topic {
        id: meta.id.clone(),
        title: meta.title.clone(),
        subtopics,
    })
}

/// Construct the flattened category topic: validated like [`build_topic`],
/// then sorted ascending by case-insensitive title.
///
/// The sort is stable, so records with equal titles keep their relative
/// author order.
#[instrument(skip_all, fields(topic = %meta.id, subtopics = subtopics.len()))]
pub fn build_flattened_category_topic(
    meta: &TopicMeta,
    mut subtopics: Vec<Subtopic>,
) -> Result<Topic> {
    validate_listing(&subtopics)?;

    subtopics.sort_by_key(|subtopic| subtopic.title.to_lowercase());
    debug!("flattened topic sorted by title");

    Ok(Topic {
        id: meta.id.clone(),
        title: meta.title.clone(),
        subtopics,
    })
}

/// Assemble the ordered topics into an indexed, immutable [`Catalog`].
///
/// Fails with `DuplicateId` if two topics share an id, or if subtopic id
/// uniqueness is violated anywhere across the catalog. Uniqueness within a
/// single topic is already checked per listing; the catalog-wide check here
/// is what makes the global id lookup safe.
pub fn build_catalog(topics: Vec<Topic>) -> Result<Catalog> {
    Catalog::build(topics)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check every record of a listing for required fields and id collisions.
fn validate_listing(subtopics: &[Subtopic]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(subtopics.len());

    for (position, subtopic) in subtopics.iter().enumerate() {
        validate_record(position, subtopic)?;
        if !seen.insert(subtopic.id.as_str()) {
            return Err(DocshelfError::duplicate_id("subtopic", &subtopic.id));
        }
    }

    Ok(())
}

/// Reject records with an empty required field.
fn validate_record(position: usize, subtopic: &Subtopic) -> Result<()> {
    // Identify the record by id, falling back to title or listing position.
    let label = if !subtopic.id.is_empty() {
        subtopic.id.clone()
    } else if !subtopic.title.is_empty() {
        subtopic.title.clone()
    } else {
        format!("record #{position}")
    };

    if subtopic.id.is_empty() {
        return Err(DocshelfError::missing_field(label, "id"));
    }
    if subtopic.title.is_empty() {
        return Err(DocshelfError::missing_field(label, "title"));
    }
    if subtopic.content.is_empty() {
        return Err(DocshelfError::missing_field(label, "content"));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
