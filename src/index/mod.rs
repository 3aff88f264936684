// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two collaborators a search depends on, and a reference implementation.
//!
//! A site ships a prebuilt index and a document store side by side. The
//! orchestrator only needs two capabilities from them:
//!
//! - [`QueryIndex`]: query string in, ranked references out. May reject the
//!   query as malformed.
//! - [`DocumentStore`]: reference in, display metadata out.
//!
//! Both are read-only for the life of a session. [`MemoryIndex`] speaks the
//! lunr-style dialect the normalizer targets and is what the CLI, the WASM
//! binding and the tests run against. Nothing in [`search`](crate::search)
//! depends on it.

pub mod memory;
pub mod tokenize;

use std::collections::{BTreeMap, HashMap};

use crate::error::{IndexError, StoreError};
use crate::types::{DocMeta, DocRef, SearchHit};

pub use memory::MemoryIndex;

/// A prebuilt index that answers dialect queries.
pub trait QueryIndex {
    /// Ranked hits for `query`, best first.
    ///
    /// Malformed queries must be reported as [`IndexError::Syntax`]. An empty
    /// query must return no hits.
    fn query(&self, query: &str) -> Result<Vec<SearchHit>, IndexError>;
}

impl<F> QueryIndex for F
where
    F: Fn(&str) -> Result<Vec<SearchHit>, IndexError>,
{
    fn query(&self, query: &str) -> Result<Vec<SearchHit>, IndexError> {
        self(query)
    }
}

/// Read-only reference → metadata mapping.
pub trait DocumentStore {
    /// `Ok(None)` means the reference is unknown. `Err` means the store is broken.
    fn lookup(&self, reference: &DocRef) -> Result<Option<&DocMeta>, StoreError>;
}

impl DocumentStore for HashMap<String, DocMeta> {
    fn lookup(&self, reference: &DocRef) -> Result<Option<&DocMeta>, StoreError> {
        Ok(self.get(reference.as_str()))
    }
}

impl DocumentStore for BTreeMap<String, DocMeta> {
    fn lookup(&self, reference: &DocRef) -> Result<Option<&DocMeta>, StoreError> {
        Ok(self.get(reference.as_str()))
    }
}
