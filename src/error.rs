// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the query pipeline.
//!
//! The split matters more than the variants. A [`QuerySyntaxError`] is an
//! expected outcome of feeding user text to the index and never leaves the
//! orchestrator. Everything else here is a fault in a collaborator or in
//! configuration and propagates with enough context to tell them apart.

use std::path::PathBuf;

use crate::search::SearchStage;

/// The index rejected a query string as malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("query syntax error at byte {position}: {message}")]
pub struct QuerySyntaxError {
    /// What the parser expected or found.
    pub message: String,
    /// Byte offset into the query where parsing failed.
    pub position: usize,
}

impl QuerySyntaxError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

/// Failure reported by a [`QueryIndex`](crate::index::QueryIndex).
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Malformed query. Recovered as "no hits" by the orchestrator.
    #[error(transparent)]
    Syntax(#[from] QuerySyntaxError),

    /// The index itself is broken or not loaded.
    #[error("index unavailable: {reason}")]
    Unavailable {
        /// Why the index could not answer.
        reason: String,
    },
}

/// Failure reported by a [`DocumentStore`](crate::index::DocumentStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The entry exists but cannot be read back.
    #[error("document store entry '{reference}' is corrupted: {reason}")]
    Corrupted { reference: String, reason: String },
}

/// Errors that escape [`Searcher::search`](crate::search::Searcher::search).
///
/// Syntax errors never appear here.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The index failed for a reason other than query syntax.
    #[error("{stage} search for '{query}' failed: {source}")]
    Index {
        stage: SearchStage,
        query: String,
        #[source]
        source: IndexError,
    },

    /// The document store failed while dereferencing hits.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A category key that the taxonomy does not define.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown category '{key}'")]
    UnknownCategory { key: String },
}

/// Invalid site configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("taxonomy must define at least one category")]
    EmptyTaxonomy,

    #[error("category '{key}' is defined more than once")]
    DuplicateCategory { key: String },

    #[error("category '{key}' has no path fragments")]
    EmptyFragments { key: String },

    #[error("category '{key}' has an empty path fragment")]
    EmptyFragment { key: String },
}

/// Invalid document corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document '{slug}' appears more than once")]
    DuplicateReference { slug: String },
}
