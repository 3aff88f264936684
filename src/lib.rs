// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query processing and result filtering for static documentation search.
//!
//! A docs site ships a prebuilt inverted index and a document store. This
//! crate sits between the search box and that index: it rewrites what the
//! reader typed into the index's query dialect, retries with a wildcard when
//! the strict query finds nothing, and narrows the results to the site
//! sections the reader switched on.
//!
//! # Architecture
//!
//! ```text
//! raw query ─▶ query::normalize ─▶ search::Searcher ─▶ Vec<ResultEntry> ─▶ category::filter_results ─▶ displayed
//!                                     │        ▲
//!                                     ▼        │
//!                               QueryIndex + DocumentStore
//!                              (index::MemoryIndex, store::DocStore)
//! ```
//!
//! [`SearchSession`] wires the two pipelines together with explicit state,
//! the way a search modal uses them.
//!
//! # Usage
//!
//! ```ignore
//! use docsift::{load_corpus, DocStore, MemoryIndex, Searcher, SiteConfig, filter_results};
//!
//! let docs = load_corpus("site/search.json")?;
//! let index = MemoryIndex::build(&docs);
//! let store = DocStore::from_documents(&docs);
//! let taxonomy = SiteConfig::default().taxonomy()?;
//!
//! let results = Searcher::new(&index, &store).search("setup guide")?;
//! let mut selection = taxonomy.selection();
//! selection.toggle("tuts")?;
//! let shown = filter_results(&results, &selection, &taxonomy)?;
//! ```

pub mod category;
pub mod config;
pub mod corpus;
pub mod error;
mod fuzzy;
pub mod index;
pub mod query;
pub mod search;
pub mod session;
pub mod store;
pub mod testing;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use category::{
    category_counts, filter_results, Category, CategoryCount, CategorySelection, CategoryTaxonomy,
};
pub use config::{CategoryConfig, SiteConfig};
pub use corpus::{load_corpus, parse_corpus, validate_corpus, Document};
pub use error::{
    ConfigError, CorpusError, IndexError, QuerySyntaxError, SearchError, SelectionError,
    StoreError,
};
pub use fuzzy::{bounded_distance, within_distance};
pub use index::{DocumentStore, MemoryIndex, QueryIndex};
pub use query::{normalize_query, parse_query, wildcard_query};
pub use search::{search, SearchOutcome, SearchStage, Searcher};
pub use session::{SearchSession, SearchTicket};
pub use store::DocStore;
pub use types::{DocMeta, DocRef, ResultEntry, SearchHit};

#[cfg(feature = "wasm")]
pub use wasm::DocsiftSearch;
