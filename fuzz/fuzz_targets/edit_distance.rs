// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded edit distance.
//!
//! The bound must never change the answer, only cut the work short.

#![no_main]

use arbitrary::Arbitrary;
use docsift::{bounded_distance, within_distance};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: DistanceInput| {
    let a: String = input.a.chars().take(40).collect();
    let b: String = input.b.chars().take(40).collect();
    let max = usize::from(input.max % 5);

    let bounded = bounded_distance(&a, &b, max);
    let exact = bounded_distance(&a, &b, usize::MAX);

    // Unbounded always answers, and the bound only filters
    let exact = exact.expect("unbounded distance always exists");
    assert_eq!(bounded, (exact <= max).then_some(exact));
    assert_eq!(within_distance(&a, &b, max), bounded.is_some());

    // Symmetric, zero only on equality, never more than the longer length
    assert_eq!(bounded_distance(&b, &a, max), bounded);
    assert_eq!(exact == 0, a == b);
    assert!(exact <= a.chars().count().max(b.chars().count()));
});
