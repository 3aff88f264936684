// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parser for the lunr-style query dialect.
//!
//! ```text
//! query   := clause (WS clause)*
//! clause  := presence? (field ':')? term ('-' term)*
//! term    := text modifier*
//! modifier:= '~' DIGITS | '^' DIGITS
//! presence:= '+' | '-'
//! ```
//!
//! Wildcards (`*`) are part of `text` and may appear anywhere in a term. A
//! hyphen inside a clause separates terms, and only the first term keeps the
//! clause's presence and field. So `+ci-cd` means "must have ci, may have cd".
//!
//! Anything the grammar can't place is a [`QuerySyntaxError`] with the byte
//! offset where parsing gave up.

use std::fmt;

use crate::error::QuerySyntaxError;

/// Largest edit distance a `~N` modifier can ask for. Larger values are clamped.
pub const MAX_EDIT_DISTANCE: u8 = 3;

/// Whether a clause must, may, or must not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Optional,
    Required,
    Prohibited,
}

/// Indexed document fields a clause can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    Excerpt,
    Body,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Excerpt, Field::Body];

    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "title" => Some(Field::Title),
            "excerpt" => Some(Field::Excerpt),
            "body" => Some(Field::Body),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Excerpt => "excerpt",
            Field::Body => "body",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One term of a parsed query with its modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// Term text as typed, wildcards included, not yet case-folded.
    pub term: String,
    /// `None` searches every field.
    pub field: Option<Field>,
    pub presence: Presence,
    pub edit_distance: u8,
    pub boost: u32,
}

impl Clause {
    fn new(term: &str) -> Self {
        Self {
            term: term.to_string(),
            field: None,
            presence: Presence::Optional,
            edit_distance: 0,
            boost: 1,
        }
    }

    #[inline]
    pub fn has_wildcard(&self) -> bool {
        self.term.contains('*')
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedQuery {
    pub clauses: Vec<Clause>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn required(&self) -> impl Iterator<Item = &Clause> {
        self.clauses
            .iter()
            .filter(|c| c.presence == Presence::Required)
    }

    pub fn prohibited(&self) -> impl Iterator<Item = &Clause> {
        self.clauses
            .iter()
            .filter(|c| c.presence == Presence::Prohibited)
    }

    /// Clauses that can contribute a match: optional and required.
    pub fn positive(&self) -> impl Iterator<Item = &Clause> {
        self.clauses
            .iter()
            .filter(|c| c.presence != Presence::Prohibited)
    }
}

/// Parse a dialect query. Blank input parses to an empty query.
pub fn parse_query(query: &str) -> Result<ParsedQuery, QuerySyntaxError> {
    let mut parsed = ParsedQuery::default();
    for (offset, word) in words(query) {
        parse_clause(word, offset, &mut parsed.clauses)?;
    }
    Ok(parsed)
}

/// Whitespace-separated words with their byte offsets.
fn words(query: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in query.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                out.push((s, &query[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        out.push((s, &query[s..]));
    }
    out
}

fn parse_clause(
    word: &str,
    offset: usize,
    clauses: &mut Vec<Clause>,
) -> Result<(), QuerySyntaxError> {
    let (presence, rest, pos) = match word.as_bytes().first() {
        Some(b'+') => (Presence::Required, &word[1..], offset + 1),
        Some(b'-') => (Presence::Prohibited, &word[1..], offset + 1),
        _ => (Presence::Optional, word, offset),
    };
    if rest.is_empty() {
        return Err(QuerySyntaxError::new(
            format!("expected a term after '{}'", &word[..1]),
            offset,
        ));
    }

    let (field, body, body_pos) = match rest.find(':') {
        Some(i) => {
            let name = &rest[..i];
            let field = Field::from_name(name).ok_or_else(|| {
                QuerySyntaxError::new(
                    format!(
                        "unrecognised field '{}', possible fields: 'title', 'excerpt', 'body'",
                        name
                    ),
                    pos,
                )
            })?;
            let body = &rest[i + 1..];
            if body.is_empty() {
                return Err(QuerySyntaxError::new(
                    format!("expected a term after '{}:'", name),
                    pos + i + 1,
                ));
            }
            (Some(field), body, pos + i + 1)
        }
        None => (None, rest, pos),
    };

    let mut first = true;
    let mut piece_pos = body_pos;
    for piece in body.split('-') {
        if !piece.is_empty() {
            let mut clause = parse_term(piece, piece_pos)?;
            if first {
                clause.presence = presence;
                clause.field = field;
                first = false;
            }
            clauses.push(clause);
        }
        piece_pos += piece.len() + 1;
    }

    if first {
        return Err(QuerySyntaxError::new("expected a term", body_pos));
    }
    Ok(())
}

fn parse_term(piece: &str, pos: usize) -> Result<Clause, QuerySyntaxError> {
    let end = piece.find(['~', '^']).unwrap_or(piece.len());
    let text = &piece[..end];
    if text.is_empty() {
        return Err(QuerySyntaxError::new(
            format!("expected a term before '{}'", &piece[..1]),
            pos,
        ));
    }
    if let Some(i) = text.find(':') {
        return Err(QuerySyntaxError::new("unexpected ':' inside a term", pos + i));
    }

    let mut clause = Clause::new(text);
    let mut rest = &piece[end..];
    let mut at = pos + end;

    while let Some(marker) = rest.chars().next() {
        if marker != '~' && marker != '^' {
            return Err(QuerySyntaxError::new(
                format!("unexpected '{}' after modifier", marker),
                at,
            ));
        }
        let digits_len = rest[1..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len() - 1);
        let digits = &rest[1..1 + digits_len];

        if marker == '~' {
            if digits.is_empty() {
                return Err(QuerySyntaxError::new("edit distance must be numeric", at));
            }
            // Overlong digit strings saturate rather than fail.
            let distance = digits.parse::<u64>().unwrap_or(u64::MAX);
            clause.edit_distance = distance.min(u64::from(MAX_EDIT_DISTANCE)) as u8;
        } else {
            if digits.is_empty() {
                return Err(QuerySyntaxError::new("boost must be numeric", at));
            }
            clause.boost = digits.parse::<u32>().unwrap_or(u32::MAX);
        }

        rest = &rest[1 + digits_len..];
        at += 1 + digits_len;
    }

    Ok(clause)
}
