// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded edit distance.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so pairs whose
//! lengths differ by more than the bound are rejected before the DP runs.
//! Inside the DP, once every cell in a row exceeds the bound no later row
//! can come back under it.

/// Edit distance between `a` and `b` if it is at most `max`.
///
/// Counts characters, not bytes.
pub fn bounded_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a.chars().count();
    let b_len = b_chars.len();

    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut row: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diag + usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(substitution);
            diag = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return None;
        }
    }

    Some(row[b_len]).filter(|&d| d <= max)
}

/// Are these strings within `max` edits of each other?
#[inline]
pub fn within_distance(a: &str, b: &str, max: usize) -> bool {
    bounded_distance(a, b, max).is_some()
}
