// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the two-stage search.
//!
//! Arbitrary text through the whole pipeline against the bundled site
//! corpus. Half-typed dialect syntax must come back as "no results", never as
//! an error or a panic.

#![no_main]

use std::sync::OnceLock;

use docsift::testing::{site_corpus, site_store};
use docsift::{DocStore, MemoryIndex, SearchStage, Searcher};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &[u8]| {
    static SITE: OnceLock<(MemoryIndex, DocStore)> = OnceLock::new();
    let (index, store) = SITE.get_or_init(|| (MemoryIndex::build(&site_corpus()), site_store()));

    let query = String::from_utf8_lossy(query);
    let query: String = query.chars().take(200).collect();

    // INVARIANT 1: the in-memory index never faults, so search never errors
    let outcome = Searcher::new(index, store)
        .search_detailed(&query)
        .expect("search over an in-memory index must not fail");

    // INVARIANT 2: every entry resolves to a stored document
    for entry in &outcome.entries {
        assert!(store.get(&entry.reference).is_some());
    }
    assert_eq!(outcome.skipped, 0);

    // INVARIANT 3: entries come best first
    assert!(outcome.entries.windows(2).all(|w| w[0].score >= w[1].score));

    // INVARIANT 4: stage is reported iff something was found
    assert_eq!(outcome.stage.is_some(), !outcome.entries.is_empty());
    if outcome.stage == Some(SearchStage::Wildcard) {
        assert_eq!(outcome.query, format!("{}*", query));
    }

    // INVARIANT 5: no duplicate references
    let mut seen = std::collections::HashSet::new();
    for entry in &outcome.entries {
        assert!(seen.insert(entry.reference.as_str()), "duplicate {}", entry.reference);
    }
});
