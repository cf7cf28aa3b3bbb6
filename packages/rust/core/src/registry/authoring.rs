//! "Authoring" listing, in reading order.

use docshelf_shared::Subtopic;

pub(super) fn subtopics() -> Vec<Subtopic> {
    vec![
        Subtopic::new(
            "writing-entries",
            "Writing Entries",
            r#"# Writing Entries

Each entry is a record with an `id`, a `title`, and a markup `content`
payload. The catalog never parses the payload; whatever dialect your
renderer understands is fine.

Pick ids like URL slugs: lowercase, dash-separated, stable over time.
"#,
        ),
        Subtopic::new(
            "organizing-topics",
            "Organizing Topics",
            r#"# Organizing Topics

Group related entries into a topic listing. Plain topics keep your listing
order exactly as written, so order entries the way you want them read.

The reference topic is different: it is flattened and sorted by title, so
its listing order only matters for entries with identical titles.
"#,
        ),
        Subtopic::new(
            "labeling-entries",
            "Labeling Entries",
            r#"# Labeling Entries

Entries destined for the reference topic carry a category label. Labels are
free-form strings; the catalog groups by exact label, so agree on spelling
with your co-authors before shipping.
"#,
        ),
    ]
}
