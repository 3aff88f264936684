// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning what people type into what the index understands.
//!
//! Plain multi-word input like `setup guide` is upgraded to `+setup +guide`,
//! so every word must appear in a hit. Anything else goes to the index as
//! typed: a single word is already as strict as it gets, and input carrying
//! dialect syntax (`title:intro`, `setup~1`, `-draft`) belongs to the user.
//!
//! The checks run in order and the first one that matches wins:
//!
//! | Input                               | Shape       | Output            |
//! |-------------------------------------|-------------|-------------------|
//! | `""`                                | `Empty`     | unchanged         |
//! | `"setup"`, `"  setup  "`            | `SingleTerm`| unchanged         |
//! | `"setup~1 guide"`, `"ci-cd guide"`  | `Reserved`  | unchanged         |
//! | `"setup  guide"`                    | `Phrase`    | `"+setup +guide"` |

/// Prefix that makes a term mandatory in the index dialect.
pub const REQUIRED_MARKER: char = '+';

/// Suffix that turns a term into a prefix match in the index dialect.
pub const WILDCARD_MARKER: char = '*';

/// Characters with meaning in the index dialect.
///
/// `+`/`-` presence, `*` wildcard, `:` field scope, `~` edit distance, `^` boost.
pub const RESERVED_CHARS: [char; 6] = ['^', '~', '+', '-', '*', ':'];

/// How the normalizer sees a raw query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryShape {
    Empty,
    SingleTerm,
    Reserved,
    /// Plain text with this many non-empty tokens (always ≥ 2).
    Phrase(usize),
}

impl QueryShape {
    /// Does `normalize_query` return this input unchanged?
    #[inline]
    pub fn is_pass_through(self) -> bool {
        !matches!(self, QueryShape::Phrase(_))
    }
}

#[inline]
pub fn is_reserved(c: char) -> bool {
    RESERVED_CHARS.contains(&c)
}

/// Classify a raw query. Blank input counts as a single term, not as empty:
/// only the literal empty string is `Empty`.
pub fn classify(raw: &str) -> QueryShape {
    if raw.is_empty() {
        return QueryShape::Empty;
    }

    let tokens = raw.split_whitespace().count();
    if tokens < 2 {
        QueryShape::SingleTerm
    } else if raw.chars().any(is_reserved) {
        QueryShape::Reserved
    } else {
        QueryShape::Phrase(tokens)
    }
}

/// Rewrite a raw query into the index dialect.
///
/// Total: every input produces an output. Pass-through inputs come back
/// byte-for-byte identical, whitespace included.
pub fn normalize_query(raw: &str) -> String {
    if classify(raw).is_pass_through() {
        return raw.to_string();
    }

    raw.split_whitespace()
        .map(|token| format!("{REQUIRED_MARKER}{token}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The fallback form of a query: the raw text with a trailing wildcard.
///
/// Built from the raw input, never from the normalized one.
pub fn wildcard_query(raw: &str) -> String {
    let mut query = String::with_capacity(raw.len() + 1);
    query.push_str(raw);
    query.push(WILDCARD_MARKER);
    query
}
