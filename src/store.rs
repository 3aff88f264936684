// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory document store.
//!
//! Accepts the shape lunr-based sites already ship (`{ "<ref>": { "title": .. } }`)
//! or builds itself from a corpus.

use std::collections::HashMap;

use crate::corpus::Document;
use crate::error::StoreError;
use crate::index::DocumentStore;
use crate::types::{DocMeta, DocRef};

#[derive(Debug, Clone, Default)]
pub struct DocStore {
    entries: HashMap<DocRef, DocMeta>,
}

impl DocStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents(docs: &[Document]) -> Self {
        docs.iter()
            .map(|doc| (doc.reference(), doc.meta()))
            .collect()
    }

    /// Parse a `{ reference: metadata }` JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: HashMap<DocRef, DocMeta> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Insert or replace an entry. Returns the previous metadata, if any.
    pub fn insert(&mut self, reference: impl Into<DocRef>, meta: DocMeta) -> Option<DocMeta> {
        self.entries.insert(reference.into(), meta)
    }

    pub fn get(&self, reference: &DocRef) -> Option<&DocMeta> {
        self.entries.get(reference)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(DocRef, DocMeta)> for DocStore {
    fn from_iter<T: IntoIterator<Item = (DocRef, DocMeta)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl DocumentStore for DocStore {
    fn lookup(&self, reference: &DocRef) -> Result<Option<&DocMeta>, StoreError> {
        Ok(self.entries.get(reference))
    }
}
