// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Strict first, wildcard second.
//!
//! A search runs at most two index queries:
//!
//! 1. **Strict**: the normalized query. For a plain phrase that's every word
//!    required (`+setup +guide`), which is what someone typing a phrase into
//!    a docs search usually means.
//! 2. **Wildcard**: only if strict produced nothing. The *raw* input with a
//!    trailing `*`, so `setup gui` still finds "setup guide" while the reader
//!    is mid-word. The normalized form is never reused here.
//!
//! The index may reject either query as malformed; that is how it answers
//! `title:` or `setup~` halfway through typing, so it counts as "no hits".
//! Any other index failure, and any store failure, is a real fault and
//! propagates. A hit whose reference the store doesn't know is skipped with
//! a warning.
//!
//! Hits keep the index's order. Nothing here re-ranks.

use std::fmt;

use serde::Serialize;

use crate::error::{IndexError, SearchError};
use crate::index::{DocumentStore, QueryIndex};
use crate::query::{normalize_query, wildcard_query};
use crate::types::ResultEntry;

/// Which of the two queries a result list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStage {
    Strict,
    Wildcard,
}

impl fmt::Display for SearchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchStage::Strict => "strict",
            SearchStage::Wildcard => "wildcard",
        })
    }
}

/// A search result with the bookkeeping a UI or CLI might want to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub entries: Vec<ResultEntry>,
    /// Stage that produced `entries`. `None` when both stages came back empty.
    pub stage: Option<SearchStage>,
    /// Dialect query sent for the last stage that ran.
    pub query: String,
    /// Hits dropped because the store had no entry for them.
    pub skipped: usize,
}

/// Runs searches against one index and store pair.
pub struct Searcher<'a, I: ?Sized, S: ?Sized> {
    index: &'a I,
    store: &'a S,
}

impl<I: ?Sized, S: ?Sized> Clone for Searcher<'_, I, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ?Sized, S: ?Sized> Copy for Searcher<'_, I, S> {}

impl<'a, I, S> Searcher<'a, I, S>
where
    I: QueryIndex + ?Sized,
    S: DocumentStore + ?Sized,
{
    pub fn new(index: &'a I, store: &'a S) -> Self {
        Self { index, store }
    }

    /// Results for `raw`, best first. Empty when neither stage finds anything.
    pub fn search(&self, raw: &str) -> Result<Vec<ResultEntry>, SearchError> {
        Ok(self.search_detailed(raw)?.entries)
    }

    pub fn search_detailed(&self, raw: &str) -> Result<SearchOutcome, SearchError> {
        let strict = normalize_query(raw);
        let (entries, skipped) = self.run_stage(SearchStage::Strict, &strict)?;
        if !entries.is_empty() {
            return Ok(SearchOutcome {
                entries,
                stage: Some(SearchStage::Strict),
                query: strict,
                skipped,
            });
        }

        let wildcard = wildcard_query(raw);
        tracing::debug!(raw, query = %wildcard, "strict query found nothing, retrying with wildcard");
        let (entries, wildcard_skipped) = self.run_stage(SearchStage::Wildcard, &wildcard)?;

        Ok(SearchOutcome {
            stage: (!entries.is_empty()).then_some(SearchStage::Wildcard),
            entries,
            query: wildcard,
            skipped: skipped + wildcard_skipped,
        })
    }

    /// One index query plus dereferencing. Returns entries and skipped count.
    fn run_stage(
        &self,
        stage: SearchStage,
        query: &str,
    ) -> Result<(Vec<ResultEntry>, usize), SearchError> {
        let hits = match self.index.query(query) {
            Ok(hits) => hits,
            Err(IndexError::Syntax(err)) => {
                tracing::debug!(%stage, query, error = %err, "index rejected query, treating as no hits");
                return Ok((Vec::new(), 0));
            }
            Err(source) => {
                return Err(SearchError::Index {
                    stage,
                    query: query.to_string(),
                    source,
                })
            }
        };

        let mut entries = Vec::with_capacity(hits.len());
        let mut skipped = 0;
        for hit in hits {
            match self.store.lookup(&hit.reference)? {
                Some(meta) => entries.push(ResultEntry::from_hit(hit, meta.clone())),
                None => {
                    tracing::warn!(%stage, reference = %hit.reference, "index hit missing from document store, skipping");
                    skipped += 1;
                }
            }
        }

        tracing::debug!(%stage, query, results = entries.len(), skipped, "stage complete");
        Ok((entries, skipped))
    }
}

/// One-shot search without keeping a [`Searcher`] around.
pub fn search<I, S>(raw: &str, index: &I, store: &S) -> Result<Vec<ResultEntry>, SearchError>
where
    I: QueryIndex + ?Sized,
    S: DocumentStore + ?Sized,
{
    Searcher::new(index, store).search(raw)
}
