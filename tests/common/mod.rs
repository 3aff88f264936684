//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::LazyLock;

use docsift::{DocStore, MemoryIndex, ResultEntry};

// Re-export canonical fixtures from docsift::testing
pub use docsift::testing::{
    make_doc, make_doc_with_excerpt, site_corpus, site_store, site_taxonomy, CorruptStore,
    ScriptedIndex,
};

/// Index over `site_corpus()`, built once per test binary.
pub static SITE_INDEX: LazyLock<MemoryIndex> = LazyLock::new(|| MemoryIndex::build(&site_corpus()));

pub static SITE_STORE: LazyLock<DocStore> = LazyLock::new(site_store);

/// References of a result list, in order.
pub fn refs(entries: &[ResultEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.reference.as_str()).collect()
}

/// A result entry with default metadata.
pub fn entry(reference: &str, score: f64) -> ResultEntry {
    ResultEntry::from_hit(
        docsift::SearchHit::new(reference, score),
        docsift::DocMeta::default(),
    )
}
