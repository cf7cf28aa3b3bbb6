//! Catalog assembly and indexing for Docshelf.
//!
//! This crate ties independently authored subtopic records into validated
//! topic groupings, builds the flattened category topic, and exposes the
//! immutable, indexed [`Catalog`](index::Catalog) query facade.
//!
//! Construction happens once, synchronously, before any query traffic; the
//! built catalog is immutable and safe to share across threads without
//! locking. Hot reload means building a fresh catalog off the hot path and
//! swapping the reference.

pub mod builder;
pub mod index;
pub mod registry;
pub mod tagger;
