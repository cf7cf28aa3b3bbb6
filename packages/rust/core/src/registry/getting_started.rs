//! "Getting Started" listing, in reading order.

use docshelf_shared::Subtopic;

pub(super) fn subtopics() -> Vec<Subtopic> {
    vec![
        Subtopic::new(
            "overview",
            "Overview",
            r#"# Overview

Docshelf is a static knowledge catalog: documentation entries grouped under
topics, built once at startup and served read-only afterwards.

Entries are authored independently as plain records. The build pipeline
validates them, groups them, and exposes the result through the catalog
query facade.
"#,
        ),
        Subtopic::new(
            "installation",
            "Installation",
            r#"# Installation

Add the core crate to your manifest:

```toml
[dependencies]
docshelf-core = "0.1"
```

The shared types crate comes along transitively.
"#,
        ),
        Subtopic::new(
            "quick-start",
            "Quick Start",
            r#"# Quick Start

Build the bundled catalog and look something up:

```rust
let catalog = docshelf_core::registry::builtin_catalog()?;
let entry = catalog.subtopic("quick-start")?;
println!("{}", entry.content);
```
"#,
        ),
    ]
}
