// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the category filter.
//!
//! Arbitrary references and flags against the default taxonomy. Unknown keys
//! must be reported, known keys must filter stably.

#![no_main]

use arbitrary::Arbitrary;
use docsift::{
    filter_results, CategorySelection, DocMeta, ResultEntry, SearchHit, SelectionError, SiteConfig,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FilterInput {
    references: Vec<String>,
    flags: Vec<(String, bool)>,
}

fuzz_target!(|input: FilterInput| {
    let Ok(taxonomy) = SiteConfig::default().taxonomy() else {
        return;
    };
    let results: Vec<ResultEntry> = input
        .references
        .into_iter()
        .take(64)
        .map(|r| ResultEntry::from_hit(SearchHit::new(r, 1.0), DocMeta::default()))
        .collect();
    let selection = CategorySelection::from_flags(input.flags);
    let unknown = selection.validate(&taxonomy).is_err();

    match filter_results(&results, &selection, &taxonomy) {
        Err(SelectionError::UnknownCategory { key }) => {
            assert!(unknown);
            assert!(!taxonomy.contains(&key));
        }
        Ok(shown) => {
            assert!(!unknown);
            if selection.is_empty() {
                assert_eq!(shown, results);
            }
            // Stable subsequence
            let mut rest = results.iter();
            assert!(shown.iter().all(|s| rest.any(|r| r == s)));
        }
    }
});
