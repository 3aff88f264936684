// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and fake collaborators so tests don't each
//! invent their own.

#![doc(hidden)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use serde_json::Map;

use crate::category::{Category, CategoryTaxonomy};
use crate::corpus::Document;
use crate::error::{IndexError, QuerySyntaxError, StoreError};
use crate::index::{DocumentStore, QueryIndex};
use crate::store::DocStore;
use crate::types::{DocMeta, DocRef, SearchHit};

/// Create a document with an empty excerpt.
pub fn make_doc(slug: &str, title: &str, text: &str) -> Document {
    Document {
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: String::new(),
        href: Some(format!("/{}", slug)),
        text: text.to_string(),
        extra: Map::new(),
    }
}

/// Create a document with every text field set.
pub fn make_doc_with_excerpt(slug: &str, title: &str, excerpt: &str, text: &str) -> Document {
    Document {
        excerpt: excerpt.to_string(),
        ..make_doc(slug, title, text)
    }
}

/// A small documentation site spread over the three default sections.
pub fn site_corpus() -> Vec<Document> {
    vec![
        make_doc_with_excerpt(
            "main-docs/intro",
            "Introduction",
            "Start here",
            "This setup guide walks through building your first chain.",
        ),
        make_doc_with_excerpt(
            "tutorials/setup",
            "Set up your environment",
            "Tutorial: install the toolchain",
            "A step-by-step tutorial to install Rust and prepare the setup of a local node.",
        ),
        make_doc_with_excerpt(
            "reference/runtime-api",
            "Runtime API",
            "Reference for runtime calls",
            "Every runtime exposes an API for extrinsics and storage.",
        ),
        make_doc_with_excerpt(
            "main-docs/build/events",
            "Events and errors",
            "Emit events from pallets",
            "Pallets emit events to report runtime state changes.",
        ),
        make_doc_with_excerpt(
            "tutorials/first-pallet",
            "Build your first pallet",
            "Tutorial",
            "Write a custom pallet and add it to the runtime.",
        ),
    ]
}

pub fn site_store() -> DocStore {
    DocStore::from_documents(&site_corpus())
}

/// The three-section taxonomy most docs sites use.
pub fn site_taxonomy() -> CategoryTaxonomy {
    CategoryTaxonomy::new(vec![
        Category::new("docs", "Docs", ["main-docs"]),
        Category::new("tuts", "Tutorials", ["tutorials"]),
        Category::new("ref", "Reference", ["reference"]),
    ])
    .expect("fixture taxonomy is valid")
}

#[derive(Debug, Clone)]
enum Scripted {
    Hits(Vec<SearchHit>),
    Syntax,
    Unavailable,
}

/// An index that answers from a script and records every query it sees.
///
/// Unscripted queries return no hits.
#[derive(Debug, Default)]
pub struct ScriptedIndex {
    responses: HashMap<String, Scripted>,
    log: RefCell<Vec<String>>,
}

impl ScriptedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `query` with these references, best first.
    pub fn with_hits(mut self, query: &str, refs: &[&str]) -> Self {
        let hits = refs
            .iter()
            .enumerate()
            .map(|(rank, r)| SearchHit::new(*r, (refs.len() - rank) as f64))
            .collect();
        self.responses.insert(query.to_string(), Scripted::Hits(hits));
        self
    }

    pub fn with_syntax_error(mut self, query: &str) -> Self {
        self.responses.insert(query.to_string(), Scripted::Syntax);
        self
    }

    pub fn with_fault(mut self, query: &str) -> Self {
        self.responses
            .insert(query.to_string(), Scripted::Unavailable);
        self
    }

    /// Every query received so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl QueryIndex for ScriptedIndex {
    fn query(&self, query: &str) -> Result<Vec<SearchHit>, IndexError> {
        self.log.borrow_mut().push(query.to_string());
        match self.responses.get(query) {
            Some(Scripted::Hits(hits)) => Ok(hits.clone()),
            Some(Scripted::Syntax) => Err(QuerySyntaxError::new("scripted syntax error", 0).into()),
            Some(Scripted::Unavailable) => Err(IndexError::Unavailable {
                reason: "scripted fault".to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }
}

/// A store whose listed entries fail to read back.
#[derive(Debug, Default)]
pub struct CorruptStore {
    pub inner: DocStore,
    pub corrupt: HashSet<String>,
}

impl CorruptStore {
    pub fn new(inner: DocStore, corrupt: &[&str]) -> Self {
        Self {
            inner,
            corrupt: corrupt.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DocumentStore for CorruptStore {
    fn lookup(&self, reference: &DocRef) -> Result<Option<&DocMeta>, StoreError> {
        if self.corrupt.contains(reference.as_str()) {
            return Err(StoreError::Corrupted {
                reference: reference.to_string(),
                reason: "checksum mismatch".to_string(),
            });
        }
        Ok(self.inner.get(reference))
    }
}
