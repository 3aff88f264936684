// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The state a search box keeps between keystrokes.
//!
//! Two derived lists, recomputed whenever an input changes:
//!
//! ```text
//! query      ──search──▶ results
//! (results, selection) ──filter──▶ displayed
//! ```
//!
//! Searches may finish out of order when the host runs them off the UI
//! thread. Each search starts with [`SearchSession::begin`], which hands out
//! a ticket; [`SearchSession::complete`] only accepts the newest ticket, so a
//! slow search for `se` can't overwrite the results for `setup`. The filter
//! always runs against the latest accepted results.

use crate::category::{apply_selection, CategorySelection, CategoryTaxonomy};
use crate::error::{SearchError, SelectionError};
use crate::index::{DocumentStore, QueryIndex};
use crate::search::Searcher;
use crate::types::ResultEntry;

/// Proof that a search was started. Only the newest one can be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

impl SearchTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    taxonomy: CategoryTaxonomy,
    selection: CategorySelection,
    query: String,
    generation: u64,
    results: Vec<ResultEntry>,
    displayed: Vec<ResultEntry>,
}

impl SearchSession {
    /// Empty query, no results, every category off.
    pub fn new(taxonomy: CategoryTaxonomy) -> Self {
        Self {
            selection: taxonomy.selection(),
            taxonomy,
            query: String::new(),
            generation: 0,
            results: Vec::new(),
            displayed: Vec::new(),
        }
    }

    /// Record a new query and supersede any search still in flight.
    pub fn begin(&mut self, raw: &str) -> SearchTicket {
        self.generation += 1;
        self.query = raw.to_string();
        SearchTicket {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Accept results for `ticket` unless a newer search has begun.
    ///
    /// Returns whether the results were applied.
    pub fn complete(&mut self, ticket: SearchTicket, results: Vec<ResultEntry>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.generation,
                latest = self.generation,
                "discarding results from superseded search"
            );
            return false;
        }
        self.results = results;
        self.refresh();
        true
    }

    /// Begin, run and complete a search in one step.
    ///
    /// On error the previous results stay in place.
    pub fn set_query<I, S>(
        &mut self,
        searcher: &Searcher<'_, I, S>,
        raw: &str,
    ) -> Result<&[ResultEntry], SearchError>
    where
        I: QueryIndex + ?Sized,
        S: DocumentStore + ?Sized,
    {
        let ticket = self.begin(raw);
        let results = searcher.search(raw)?;
        self.complete(ticket, results);
        Ok(&self.displayed)
    }

    /// Flip a category and re-filter. Returns the category's new state.
    pub fn toggle_category(&mut self, key: &str) -> Result<bool, SelectionError> {
        let active = self.selection.toggle(key)?;
        self.refresh();
        Ok(active)
    }

    pub fn set_category(&mut self, key: &str, active: bool) -> Result<(), SelectionError> {
        self.selection.set(key, active)?;
        self.refresh();
        Ok(())
    }

    pub fn clear_categories(&mut self) {
        self.selection.clear();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.displayed = apply_selection(&self.results, &self.selection, &self.taxonomy);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Latest accepted results, unfiltered.
    pub fn results(&self) -> &[ResultEntry] {
        &self.results
    }

    /// Latest accepted results after the category filter.
    pub fn displayed(&self) -> &[ResultEntry] {
        &self.displayed
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn taxonomy(&self) -> &CategoryTaxonomy {
        &self.taxonomy
    }

    pub fn labels(&self) -> Vec<&str> {
        self.taxonomy.labels()
    }
}
