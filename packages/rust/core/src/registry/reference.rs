//! "Reference" listing.
//!
//! Authored as one block per category; the tagger stamps the label onto each
//! block. Listing order is irrelevant here except for title ties, since the
//! builder flattens and sorts this topic.

use docshelf_shared::Subtopic;

use crate::tagger;

pub(super) fn subtopics() -> Vec<Subtopic> {
    let mut entries = tagger::tag_all(&format_entries(), "format");
    entries.extend(tagger::tag_all(&build_entries(), "build"));
    entries.extend(tagger::tag_all(&query_entries(), "query"));
    entries
}

fn format_entries() -> Vec<Subtopic> {
    vec![
        Subtopic::new(
            "subtopic-record",
            "Subtopic Record",
            r#"# Subtopic Record

Fields: `id` (unique slug), `title` (display string), `content` (opaque
markup), and an optional `category` label. All three required fields must
be non-empty or the build rejects the record.
"#,
        ),
        Subtopic::new(
            "topic-listing",
            "Topic Listing",
            r#"# Topic Listing

A topic is a header (`id`, `title`) plus an ordered listing of records.
Ids must be unique within the listing and across the whole catalog.
"#,
        ),
        Subtopic::new(
            "category-labels",
            "Category Labels",
            r#"# Category Labels

Free-form strings attached to reference entries. No closed set is
enforced; a label exists by being used.
"#,
        ),
    ]
}

fn build_entries() -> Vec<Subtopic> {
    vec![
        Subtopic::new(
            "build-pipeline",
            "Build Pipeline",
            r#"# Build Pipeline

Listings become topics, topics become the catalog. Every failure is
construction-time: a catalog that builds is fully valid, and a catalog
that does not build never exists.
"#,
        ),
        Subtopic::new(
            "validation-rules",
            "Validation Rules",
            r#"# Validation Rules

Rejected at build time: records with an empty `id`, `title`, or `content`;
duplicate ids within a listing; duplicate topic ids; and subtopic id
collisions anywhere across the catalog.
"#,
        ),
    ]
}

fn query_entries() -> Vec<Subtopic> {
    vec![
        Subtopic::new(
            "id-lookup",
            "Id Lookup",
            r#"# Id Lookup

`catalog.topic(id)` and `catalog.subtopic(id)` are O(1) and return typed
not-found errors on a miss. Subtopic lookup is global, which is why ids
are unique catalog-wide.
"#,
        ),
        Subtopic::new(
            "category-lookup",
            "Category Lookup",
            r#"# Category Lookup

`catalog.subtopics_in(label)` returns members in reference-topic order.
Unknown labels give an empty list rather than an error.
"#,
        ),
    ]
}
