// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo tolerance for `term~N` clauses.

mod levenshtein;

pub use levenshtein::*;
