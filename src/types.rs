// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow through the pipeline.
//!
//! A search starts as a raw string and ends as a list of [`ResultEntry`]. In
//! between, the index only ever speaks in [`SearchHit`]s: a reference and a
//! score. The reference is the join key into the document store, and the
//! same string is what the category taxonomy matches path fragments against.
//!
//! # Invariants
//!
//! - **ResultEntry**: `entry.reference` is a key of the store it was built
//!   from. Hits whose reference is missing never become entries.
//! - **Ordering**: a `Vec<ResultEntry>` is in index rank order. Nothing in this
//!   crate re-sorts results after the index returns them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// NEWTYPES
// =============================================================================

/// Opaque document identifier, usually a slug or site path.
///
/// Prevents accidentally passing a query string where a reference is expected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocRef(String);

impl DocRef {
    pub fn new(reference: impl Into<String>) -> Self {
        DocRef(reference.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring test used for category membership.
    #[inline]
    pub fn contains(&self, fragment: &str) -> bool {
        self.0.contains(fragment)
    }
}

impl fmt::Display for DocRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DocRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocRef {
    fn from(reference: &str) -> Self {
        DocRef(reference.to_string())
    }
}

impl From<String> for DocRef {
    fn from(reference: String) -> Self {
        DocRef(reference)
    }
}

// =============================================================================
// INDEX OUTPUT
// =============================================================================

/// One ranked hit from the index.
///
/// Rank is the position in the returned `Vec`; `score` is informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "ref")]
    pub reference: DocRef,
    #[serde(default)]
    pub score: f64,
}

impl SearchHit {
    pub fn new(reference: impl Into<DocRef>, score: f64) -> Self {
        Self {
            reference: reference.into(),
            score,
        }
    }
}

// =============================================================================
// STORE METADATA
// =============================================================================

/// Display metadata for one document.
///
/// Stores are produced by site generators with their own ideas about which
/// fields matter, so unknown keys are carried through in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocMeta {
    pub fn new(title: impl Into<String>, excerpt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            excerpt: excerpt.into(),
            href: None,
            extra: Map::new(),
        }
    }
}

/// Keys a [`ResultEntry`] owns. Store metadata may not shadow them.
const RESERVED_KEYS: [&str; 2] = ["slug", "score"];

/// A hit joined with its store metadata. This is what the caller displays.
///
/// Serializes flat: `slug`, `score`, then the metadata fields. A store entry
/// that carries its own `slug` or `score` loses it to the hit's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    #[serde(rename = "slug")]
    pub reference: DocRef,
    #[serde(default)]
    pub score: f64,
    #[serde(flatten)]
    pub meta: DocMeta,
}

impl ResultEntry {
    pub fn from_hit(hit: SearchHit, mut meta: DocMeta) -> Self {
        for key in RESERVED_KEYS {
            meta.extra.remove(key);
        }
        Self {
            reference: hit.reference,
            score: hit.score,
            meta,
        }
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.meta.title
    }
}
