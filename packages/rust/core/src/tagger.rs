//! Category tagger.
//!
//! Attaches a category label to a subtopic record without mutating the
//! original. The same underlying records may also appear untagged elsewhere
//! in the catalog, so tagging always produces a fresh copy.

use docshelf_shared::Subtopic;

/// Return a copy of `subtopic` carrying `category`.
///
/// Overwrites any label already present. The input is left untouched.
pub fn with_category(subtopic: &Subtopic, category: &str) -> Subtopic {
    Subtopic {
        category: Some(category.to_string()),
        ..subtopic.clone()
    }
}

/// Tag every record in an author listing with the same label, preserving order.
pub fn tag_all(subtopics: &[Subtopic], category: &str) -> Vec<Subtopic> {
    subtopics
        .iter()
        .map(|subtopic| with_category(subtopic, category))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
