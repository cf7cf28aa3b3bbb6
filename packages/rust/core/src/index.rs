//! Catalog index and query facade.
//!
//! Derived lookup maps over a validated catalog. The indexes store positions
//! into the topic list rather than copies, so every query hands back a
//! reference to the record stored in the topic structure itself.

use std::collections::HashMap;

use tracing::{info, instrument};

use docshelf_shared::{DocshelfError, Result, Subtopic, Topic};

/// Position of a subtopic within the catalog: (topic index, subtopic index).
type Pos = (usize, usize);

/// The fully built, immutable catalog root.
///
/// Holds the ordered topic sequence plus derived O(1) lookups by topic id,
/// subtopic id (global), and category label. Only [`Catalog::build`] — via
/// [`builder::build_catalog`](crate::builder::build_catalog) — can produce a
/// value, so every reachable `Catalog` has passed validation. All query
/// methods take `&self` and return read-only views; nothing mutates the
/// catalog after construction, which is what makes lock-free concurrent
/// reads safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    topics: Vec<Topic>,
    by_topic_id: HashMap<String, usize>,
    by_subtopic_id: HashMap<String, Pos>,
    by_category: HashMap<String, Vec<Pos>>,
}

impl Catalog {
    /// Index the given topics, enforcing catalog-scope id uniqueness.
    ///
    /// A failure here means no `Catalog` value is produced at all; queries
    /// can never observe a partially built catalog.
    #[instrument(skip_all, fields(topics = topics.len()))]
    pub(crate) fn build(topics: Vec<Topic>) -> Result<Self> {
        let mut by_topic_id = HashMap::with_capacity(topics.len());
        let mut by_subtopic_id = HashMap::new();
        let mut by_category: HashMap<String, Vec<Pos>> = HashMap::new();

        for (topic_idx, topic) in topics.iter().enumerate() {
            if by_topic_id.insert(topic.id.clone(), topic_idx).is_some() {
                return Err(DocshelfError::duplicate_id("topic", &topic.id));
            }

            for (subtopic_idx, subtopic) in topic.subtopics.iter().enumerate() {
                let pos = (topic_idx, subtopic_idx);
                if by_subtopic_id.insert(subtopic.id.clone(), pos).is_some() {
                    return Err(DocshelfError::duplicate_id(
                        "catalog-wide subtopic",
                        &subtopic.id,
                    ));
                }

                // Category positions follow catalog iteration order, which
                // for the flattened topic is its sorted order.
                if let Some(category) = &subtopic.category {
                    by_category.entry(category.clone()).or_default().push(pos);
                }
            }
        }

        info!(
            topics = topics.len(),
            subtopics = by_subtopic_id.len(),
            categories = by_category.len(),
            "catalog built"
        );

        Ok(Self {
            topics,
            by_topic_id,
            by_subtopic_id,
            by_category,
        })
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Look up a topic by id.
    pub fn topic(&self, topic_id: &str) -> Result<&Topic> {
        self.by_topic_id
            .get(topic_id)
            .map(|&idx| &self.topics[idx])
            .ok_or_else(|| DocshelfError::not_found("topic", topic_id))
    }

    /// Global subtopic lookup by id.
    ///
    /// Returns the exact record stored inside its parent topic, not a copy;
    /// `std::ptr::eq` against the topic's own entry holds.
    pub fn subtopic(&self, subtopic_id: &str) -> Result<&Subtopic> {
        self.by_subtopic_id
            .get(subtopic_id)
            .map(|&(t, s)| &self.topics[t].subtopics[s])
            .ok_or_else(|| DocshelfError::not_found("subtopic", subtopic_id))
    }

    /// All subtopics carrying `category`, in the relative order they appear
    /// in the flattened topic (a stable filter, not a re-sort).
    ///
    /// An unknown label yields an empty vec, not an error.
    pub fn subtopics_in(&self, category: &str) -> Vec<&Subtopic> {
        self.by_category
            .get(category)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&(t, s)| &self.topics[t].subtopics[s])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Known category labels, sorted for deterministic presentation.
    pub fn categories(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.by_category.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// The full ordered topic sequence.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Total number of subtopics across all topics.
    pub fn subtopic_count(&self) -> usize {
        self.by_subtopic_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Topic;
    type IntoIter = std::slice::Iter<'a, Topic>;

    fn into_iter(self) -> Self::IntoIter {
        self.topics.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_catalog, build_flattened_category_topic, build_topic};
    use crate::tagger;
    use docshelf_shared::TopicMeta;

    fn make_subtopic(id: &str, title: &str) -> Subtopic {
        Subtopic::new(id, title, format!("# {title}\n\nBody text.\n"))
    }

    /// Two plain topics plus the flattened category topic from the
    /// alpha/Bravo/Bravo example.
    fn make_catalog() -> Catalog {
        let getting_started = build_topic(
            &TopicMeta::new("getting-started", "Getting Started"),
            vec![
                make_subtopic("overview", "Overview"),
                make_subtopic("install", "Installation"),
            ],
        )
        .unwrap();

        let guides = build_topic(
            &TopicMeta::new("guides", "Guides"),
            vec![make_subtopic("authoring", "Authoring Entries")],
        )
        .unwrap();

        let reference = build_flattened_category_topic(
            &TopicMeta::new("reference", "Reference"),
            tagger::tag_all(
                &[
                    make_subtopic("a", "Bravo"),
                    make_subtopic("b", "alpha"),
                    make_subtopic("c", "Bravo"),
                ],
                "X",
            ),
        )
        .unwrap();

        build_catalog(vec![getting_started, guides, reference]).unwrap()
    }

    #[test]
    fn topic_lookup_hits_and_misses() {
        let catalog = make_catalog();

        let topic = catalog.topic("guides").unwrap();
        assert_eq!(topic.title, "Guides");

        let err = catalog.topic("nonexistent").unwrap_err();
        assert!(matches!(err, DocshelfError::NotFound { kind: "topic", .. }));
    }

    #[test]
    fn subtopic_lookup_is_identity_preserving() {
        let catalog = make_catalog();

        // Every id must resolve to the very record held by its topic.
        for topic in &catalog {
            for stored in &topic.subtopics {
                let found = catalog.subtopic(&stored.id).unwrap();
                assert!(std::ptr::eq(found, stored));
            }
        }
    }

    #[test]
    fn subtopic_lookup_miss_is_a_typed_error() {
        let catalog = make_catalog();

        let err = catalog.subtopic("nonexistent-id").unwrap_err();
        assert!(matches!(
            err,
            DocshelfError::NotFound { kind: "subtopic", ref id } if id == "nonexistent-id"
        ));
    }

    #[test]
    fn category_filter_preserves_flattened_order() {
        let catalog = make_catalog();

        let members = catalog.subtopics_in("X");
        let ids: Vec<&str> = members.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn unknown_category_yields_empty_vec() {
        let catalog = make_catalog();
        assert!(catalog.subtopics_in("Y").is_empty());
    }

    #[test]
    fn categories_are_sorted() {
        let reference = build_flattened_category_topic(
            &TopicMeta::new("reference", "Reference"),
            vec![
                tagger::with_category(&make_subtopic("q1", "Queries"), "query"),
                tagger::with_category(&make_subtopic("f1", "Fields"), "format"),
                tagger::with_category(&make_subtopic("b1", "Builds"), "build"),
            ],
        )
        .unwrap();

        let catalog = build_catalog(vec![reference]).unwrap();
        assert_eq!(catalog.categories(), ["build", "format", "query"]);
    }

    #[test]
    fn rebuild_from_same_input_is_deep_equal() {
        let first = make_catalog();
        let second = make_catalog();
        assert_eq!(first, second);
    }

    #[test]
    fn iteration_follows_topic_order() {
        let catalog = make_catalog();

        let ids: Vec<&str> = catalog.topics().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["getting-started", "guides", "reference"]);
        assert_eq!(catalog.subtopic_count(), 6);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn catalog_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
