//! Core domain types for the Docshelf catalog.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Subtopic
// ---------------------------------------------------------------------------

/// A single catalog entry: one independently authored unit of documentation.
///
/// The `content` payload is opaque markup handed to the presentation layer
/// unchanged; the catalog core never parses it. `category` is present only
/// on entries that belong to the flattened, category-grouped topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtopic {
    /// Globally unique identifier (author-chosen slug).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Opaque markup payload, never inspected by the core.
    pub content: String,
    /// Free-form grouping label; no closed enumeration is enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Subtopic {
    /// Create an untagged record, as author listings write them.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Topic
// ---------------------------------------------------------------------------

/// Author-supplied topic header, handed to the catalog builder together
/// with an ordered listing of subtopic records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicMeta {
    /// Identifier, unique among topics.
    pub id: String,
    /// Display title.
    pub title: String,
}

impl TopicMeta {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// A named, ordered collection of subtopics.
///
/// The order is author-defined for plain topics and derived by a stable,
/// case-insensitive title sort for the flattened category topic. Topics are
/// only produced by the builder, which validates records before attaching
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub subtopics: Vec<Subtopic>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtopic_serialization_roundtrip() {
        let subtopic = Subtopic {
            id: "installation".into(),
            title: "Installation".into(),
            content: "# Installation\n\nAdd the crate to your workspace.\n".into(),
            category: Some("build".into()),
        };

        let json = serde_json::to_string(&subtopic).expect("serialize");
        let parsed: Subtopic = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, subtopic);
    }

    #[test]
    fn untagged_subtopic_omits_category() {
        let subtopic = Subtopic::new("overview", "Overview", "# Overview\n");

        let json = serde_json::to_string(&subtopic).expect("serialize");
        assert!(!json.contains("category"));

        let parsed: Subtopic = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.category, None);
    }

    #[test]
    fn topic_serialization_roundtrip() {
        let topic = Topic {
            id: "getting-started".into(),
            title: "Getting Started".into(),
            subtopics: vec![
                Subtopic::new("overview", "Overview", "# Overview\n"),
                Subtopic::new("quick-start", "Quick Start", "# Quick Start\n"),
            ],
        };

        let json = serde_json::to_string_pretty(&topic).expect("serialize");
        let parsed: Topic = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, topic);
        assert_eq!(parsed.subtopics.len(), 2);
    }
}
