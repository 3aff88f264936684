// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Narrowing a result list to the sections a reader picked.
//!
//! A [`CategoryTaxonomy`] says which path fragments make a document part of
//! each section. A [`CategorySelection`] says which sections are switched on.
//! Filtering keeps an entry when its reference contains any fragment of any
//! active category. With nothing switched on, everything is shown.
//!
//! The taxonomy is data, not code: there is no limit on the number of
//! categories and no category is special.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SelectionError};
use crate::types::{DocRef, ResultEntry};

/// One toggleable section of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub label: String,
    pub fragments: Vec<String>,
}

impl Category {
    pub fn new<I, S>(key: impl Into<String>, label: impl Into<String>, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            label: label.into(),
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// Does `reference` contain any of this category's fragments?
    pub fn matches(&self, reference: &DocRef) -> bool {
        self.fragments.iter().any(|f| reference.contains(f))
    }
}

/// The fixed set of categories, in display order.
///
/// # Invariants
///
/// - At least one category.
/// - Keys are unique.
/// - Every category has at least one fragment and no fragment is empty
///   (an empty fragment would match every reference).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTaxonomy {
    categories: Vec<Category>,
}

impl CategoryTaxonomy {
    pub fn new(categories: Vec<Category>) -> Result<Self, ConfigError> {
        if categories.is_empty() {
            return Err(ConfigError::EmptyTaxonomy);
        }
        for (i, category) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.key == category.key) {
                return Err(ConfigError::DuplicateCategory {
                    key: category.key.clone(),
                });
            }
            if category.fragments.is_empty() {
                return Err(ConfigError::EmptyFragments {
                    key: category.key.clone(),
                });
            }
            if category.fragments.iter().any(String::is_empty) {
                return Err(ConfigError::EmptyFragment {
                    key: category.key.clone(),
                });
            }
        }
        Ok(Self { categories })
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.key.as_str())
    }

    /// Display labels in taxonomy order.
    pub fn labels(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// A fresh selection with every category off.
    pub fn selection(&self) -> CategorySelection {
        CategorySelection::for_taxonomy(self)
    }

    /// [`filter_results`] against this taxonomy.
    pub fn filter(
        &self,
        results: &[ResultEntry],
        selection: &CategorySelection,
    ) -> Result<Vec<ResultEntry>, SelectionError> {
        filter_results(results, selection, self)
    }
}

/// Which categories are switched on.
///
/// Serializes as a plain `{ "key": bool }` object so hosts can pass it
/// around as JSON. It lives for one page visit and is never written back.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySelection {
    flags: BTreeMap<String, bool>,
}

impl CategorySelection {
    /// Every category of `taxonomy`, all off.
    pub fn for_taxonomy(taxonomy: &CategoryTaxonomy) -> Self {
        Self {
            flags: taxonomy.keys().map(|k| (k.to_string(), false)).collect(),
        }
    }

    /// Build from raw flags. Keys are checked when the selection is used.
    pub fn from_flags<I, K>(flags: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        Self {
            flags: flags.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Flip a category. Returns the new state.
    pub fn toggle(&mut self, key: &str) -> Result<bool, SelectionError> {
        let flag = self.flag_mut(key)?;
        *flag = !*flag;
        Ok(*flag)
    }

    pub fn set(&mut self, key: &str, active: bool) -> Result<(), SelectionError> {
        *self.flag_mut(key)? = active;
        Ok(())
    }

    fn flag_mut(&mut self, key: &str) -> Result<&mut bool, SelectionError> {
        self.flags
            .get_mut(key)
            .ok_or_else(|| SelectionError::UnknownCategory {
                key: key.to_string(),
            })
    }

    /// Switch every category off.
    pub fn clear(&mut self) {
        self.flags.values_mut().for_each(|v| *v = false);
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    pub fn active_keys(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, active)| **active)
            .map(|(k, _)| k.as_str())
    }

    /// True when no category is on, i.e. no filtering happens.
    pub fn is_empty(&self) -> bool {
        self.active_keys().next().is_none()
    }

    /// Reject keys the taxonomy doesn't define.
    pub fn validate(&self, taxonomy: &CategoryTaxonomy) -> Result<(), SelectionError> {
        match self.flags.keys().find(|k| !taxonomy.contains(k)) {
            Some(key) => Err(SelectionError::UnknownCategory { key: key.clone() }),
            None => Ok(()),
        }
    }
}

/// Keep the entries that belong to at least one active category.
///
/// Stable: survivors keep their input order. With no active category the
/// input comes back unchanged.
pub fn filter_results(
    results: &[ResultEntry],
    selection: &CategorySelection,
    taxonomy: &CategoryTaxonomy,
) -> Result<Vec<ResultEntry>, SelectionError> {
    selection.validate(taxonomy)?;
    Ok(apply_selection(results, selection, taxonomy))
}

/// The filter itself, for callers that already know the selection is valid.
pub(crate) fn apply_selection(
    results: &[ResultEntry],
    selection: &CategorySelection,
    taxonomy: &CategoryTaxonomy,
) -> Vec<ResultEntry> {
    let active: Vec<&Category> = taxonomy
        .iter()
        .filter(|c| selection.is_active(&c.key))
        .collect();
    if active.is_empty() {
        return results.to_vec();
    }

    results
        .iter()
        .filter(|entry| active.iter().any(|c| c.matches(&entry.reference)))
        .cloned()
        .collect()
}

/// How many results fall in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub key: String,
    pub label: String,
    pub count: usize,
}

/// Per-category match counts in taxonomy order, ignoring the selection.
///
/// An entry counts once per category it matches, so counts can sum to more
/// than `results.len()`.
pub fn category_counts(results: &[ResultEntry], taxonomy: &CategoryTaxonomy) -> Vec<CategoryCount> {
    taxonomy
        .iter()
        .map(|c| CategoryCount {
            key: c.key.clone(),
            label: c.label.clone(),
            count: results.iter().filter(|e| c.matches(&e.reference)).count(),
        })
        .collect()
}
