// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Source documents, as a site generator emits them.
//!
//! A corpus is a JSON array of [`Document`]s. The same records build both the
//! reference index and the document store, which keeps the two in agreement
//! about which references exist.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CorpusError;
use crate::types::{DocMeta, DocRef};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Site path, e.g. `main-docs/build/events`. Category fragments match against this.
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Full searchable text.
    #[serde(default, alias = "body")]
    pub text: String,
    /// Anything else, copied into the store entry untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn reference(&self) -> DocRef {
        DocRef::new(self.slug.as_str())
    }

    /// Store metadata for this document. The body text is not copied.
    pub fn meta(&self) -> DocMeta {
        DocMeta {
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            href: self.href.clone(),
            extra: self.extra.clone(),
        }
    }
}

/// Parse a corpus from JSON text.
pub fn parse_corpus(json: &str) -> Result<Vec<Document>, CorpusError> {
    let docs: Vec<Document> = serde_json::from_str(json)?;
    validate_corpus(&docs)?;
    Ok(docs)
}

/// Every slug must be unique: it is the join key between index and store.
pub fn validate_corpus(docs: &[Document]) -> Result<(), CorpusError> {
    let mut seen = HashSet::with_capacity(docs.len());
    match docs.iter().find(|doc| !seen.insert(doc.slug.as_str())) {
        Some(doc) => Err(CorpusError::DuplicateReference {
            slug: doc.slug.clone(),
        }),
        None => Ok(()),
    }
}

/// Read and parse a corpus file.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<Document>, CorpusError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let docs = parse_corpus(&json)?;
    tracing::debug!(path = %path.display(), documents = docs.len(), "corpus loaded");
    Ok(docs)
}
