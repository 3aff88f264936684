// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the normalizer and the dialect parser.

#![no_main]

use docsift::query::{classify, QueryShape};
use docsift::{normalize_query, parse_query, wildcard_query};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw: &str| {
    let normalized = normalize_query(raw);

    // Pass-through is byte-for-byte
    if classify(raw).is_pass_through() {
        assert_eq!(normalized, raw);
    }

    // Idempotent
    assert_eq!(normalize_query(&normalized), normalized);

    // A rewritten phrase is always valid dialect with every clause required
    if let QueryShape::Phrase(words) = classify(raw) {
        let parsed = parse_query(&normalized).expect("normalized phrase must parse");
        assert_eq!(parsed.required().count(), words);
    }

    // Errors point inside the query
    for query in [raw.to_string(), wildcard_query(raw)] {
        if let Err(err) = parse_query(&query) {
            assert!(err.position <= query.len(), "{err} at {}", err.position);
        }
    }
});
