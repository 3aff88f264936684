// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! An inverted index that answers the lunr-style dialect.
//!
//! Each document contributes three fields (title, excerpt, body). Terms map
//! to posting lists of `(doc, field, tf)`, kept in a `BTreeMap` so a trailing
//! wildcard is a range scan instead of a vocabulary walk.
//!
//! # Matching
//!
//! A document is a hit when it matches every required clause, no prohibited
//! clause, and at least one positive clause. A query made only of prohibited
//! clauses matches every document it doesn't exclude.
//!
//! # Scoring
//!
//! BM25 per field, weighted by field (title ≫ excerpt > body) and by the
//! clause's `^N` boost. Terms reached through a wildcard or an edit distance
//! score less than the term itself. Equal scores fall back to reference order
//! so results never depend on hash iteration.
//!
//! # INVARIANTS
//!
//! 1. **POSTINGS_SORTED**: each posting list is ordered by `(doc, field)`.
//! 2. **DOC_FREQ**: `doc_freq[term]` is the number of distinct docs in its postings.
//! 3. **NON_EMPTY**: every vocabulary term has at least one posting.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::Bound;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::corpus::Document;
use crate::error::IndexError;
use crate::fuzzy::bounded_distance;
use crate::index::tokenize::{fold_term, tokenize};
use crate::index::QueryIndex;
use crate::query::{parse_query, Clause, Field, ParsedQuery, Presence};
use crate::types::{DocRef, SearchHit};

const BM25_K1: f64 = 1.2;
const BM25_B: f64 = 0.75;

/// Weight of a term found through `*` rather than typed in full.
const WILDCARD_DAMPING: f64 = 0.5;

fn field_boost(field: Field) -> f64 {
    match field {
        Field::Title => 10.0,
        Field::Excerpt => 2.0,
        Field::Body => 1.0,
    }
}

fn slot(field: Field) -> usize {
    match field {
        Field::Title => 0,
        Field::Excerpt => 1,
        Field::Body => 2,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Posting {
    doc: u32,
    field: Field,
    tf: u32,
}

#[derive(Debug, Clone, Default)]
struct TermEntry {
    postings: Vec<Posting>,
    doc_freq: u32,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    refs: Vec<DocRef>,
    field_lengths: Vec<[u32; 3]>,
    avg_field_length: [f64; 3],
    terms: BTreeMap<String, TermEntry>,
}

/// Per-field token lists for one document, in `Field::ALL` order.
fn analyze(doc: &Document) -> [Vec<String>; 3] {
    [
        tokenize(&doc.title),
        tokenize(&doc.excerpt),
        tokenize(&doc.text),
    ]
}

impl MemoryIndex {
    pub fn build(docs: &[Document]) -> Self {
        #[cfg(feature = "parallel")]
        let analyzed: Vec<[Vec<String>; 3]> = docs.par_iter().map(analyze).collect();
        #[cfg(not(feature = "parallel"))]
        let analyzed: Vec<[Vec<String>; 3]> = docs.iter().map(analyze).collect();

        let mut index = MemoryIndex {
            refs: docs.iter().map(Document::reference).collect(),
            field_lengths: Vec::with_capacity(docs.len()),
            ..Default::default()
        };
        let mut totals = [0u64; 3];

        for (doc_id, fields) in analyzed.into_iter().enumerate() {
            let doc = doc_id as u32;
            let mut lengths = [0u32; 3];

            for field in Field::ALL {
                let tokens = &fields[slot(field)];
                lengths[slot(field)] = tokens.len() as u32;
                totals[slot(field)] += tokens.len() as u64;

                // BTreeMap keeps insertion deterministic across runs.
                let mut tf: BTreeMap<&str, u32> = BTreeMap::new();
                for token in tokens {
                    *tf.entry(token.as_str()).or_insert(0) += 1;
                }
                for (term, count) in tf {
                    let entry = index.terms.entry(term.to_string()).or_default();
                    if entry.postings.last().map_or(true, |p| p.doc != doc) {
                        entry.doc_freq += 1;
                    }
                    entry.postings.push(Posting {
                        doc,
                        field,
                        tf: count,
                    });
                }
            }
            index.field_lengths.push(lengths);
        }

        if !docs.is_empty() {
            for (avg, total) in index.avg_field_length.iter_mut().zip(totals) {
                *avg = total as f64 / docs.len() as f64;
            }
        }

        tracing::debug!(
            documents = index.refs.len(),
            terms = index.terms.len(),
            "memory index built"
        );
        index
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Run an already-parsed query.
    pub fn evaluate(&self, query: &ParsedQuery) -> Vec<SearchHit> {
        if query.is_empty() {
            return Vec::new();
        }

        let mut scores: HashMap<u32, f64> = HashMap::new();
        let mut required: Option<HashSet<u32>> = None;
        let mut prohibited: HashSet<u32> = HashSet::new();
        let mut has_positive = false;

        for clause in &query.clauses {
            let matches = self.match_clause(clause);
            match clause.presence {
                Presence::Prohibited => {
                    prohibited.extend(matches.keys().copied());
                    continue;
                }
                Presence::Required => {
                    let docs: HashSet<u32> = matches.keys().copied().collect();
                    required = Some(match required {
                        None => docs,
                        Some(prev) => prev.intersection(&docs).copied().collect(),
                    });
                }
                Presence::Optional => {}
            }
            has_positive = true;
            for (doc, score) in matches {
                *scores.entry(doc).or_insert(0.0) += score;
            }
        }

        let candidates: Vec<(u32, f64)> = if has_positive {
            scores.into_iter().collect()
        } else {
            (0..self.refs.len() as u32).map(|doc| (doc, 0.0)).collect()
        };

        let mut hits: Vec<(u32, f64)> = candidates
            .into_iter()
            .filter(|(doc, _)| required.as_ref().map_or(true, |r| r.contains(doc)))
            .filter(|(doc, _)| !prohibited.contains(doc))
            .collect();

        hits.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| self.refs[a.0 as usize].cmp(&self.refs[b.0 as usize]))
        });

        hits.into_iter()
            .map(|(doc, score)| SearchHit::new(self.refs[doc as usize].clone(), score))
            .collect()
    }

    /// Score every document the clause touches (presence is ignored here).
    fn match_clause(&self, clause: &Clause) -> HashMap<u32, f64> {
        let mut matches = HashMap::new();
        let term = fold_term(&clause.term);
        if term.is_empty() {
            return matches;
        }

        let boost = f64::from(clause.boost.max(1));
        for (candidate, weight) in self.expand(&term, clause.edit_distance) {
            let Some(entry) = self.terms.get(candidate) else {
                continue;
            };
            let idf = self.idf(entry.doc_freq);
            for posting in &entry.postings {
                if clause.field.is_some_and(|f| f != posting.field) {
                    continue;
                }
                let score = self.bm25(posting, idf) * field_boost(posting.field) * weight * boost;
                *matches.entry(posting.doc).or_insert(0.0) += score;
            }
        }
        matches
    }

    /// Vocabulary terms a folded query term stands for, with their weights.
    fn expand<'a>(&'a self, term: &'a str, edit_distance: u8) -> Vec<(&'a str, f64)> {
        if term.contains('*') {
            let damp = |t: &str| if t == term { 1.0 } else { WILDCARD_DAMPING };
            let prefix = term.trim_end_matches('*');
            if !prefix.contains('*') {
                return self
                    .terms
                    .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
                    .take_while(|(t, _)| t.starts_with(prefix))
                    .map(|(t, _)| (t.as_str(), damp(t)))
                    .collect();
            }
            return self
                .terms
                .keys()
                .filter(|t| wildcard_match(term, t))
                .map(|t| (t.as_str(), damp(t)))
                .collect();
        }

        if edit_distance > 0 {
            return self
                .terms
                .keys()
                .filter_map(|t| {
                    bounded_distance(term, t, usize::from(edit_distance))
                        .map(|d| (t.as_str(), 1.0 / (1.0 + d as f64)))
                })
                .collect();
        }

        vec![(term, 1.0)]
    }

    fn idf(&self, doc_freq: u32) -> f64 {
        let n = self.refs.len() as f64;
        let df = f64::from(doc_freq);
        (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
    }

    fn bm25(&self, posting: &Posting, idf: f64) -> f64 {
        let s = slot(posting.field);
        let len = f64::from(self.field_lengths[posting.doc as usize][s]);
        let avg = self.avg_field_length[s].max(1.0);
        let tf = f64::from(posting.tf);
        idf * (tf * (BM25_K1 + 1.0)) / (tf + BM25_K1 * (1.0 - BM25_B + BM25_B * len / avg))
    }
}

impl QueryIndex for MemoryIndex {
    fn query(&self, query: &str) -> Result<Vec<SearchHit>, IndexError> {
        let parsed = parse_query(query)?;
        Ok(self.evaluate(&parsed))
    }
}

/// Glob match where `*` stands for any run of characters.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    let (mut pi, mut ti) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while ti < t.len() {
        if pi < p.len() && p[pi] == '*' {
            star = Some((pi, ti));
            pi += 1;
        } else if pi < p.len() && p[pi] == t[ti] {
            pi += 1;
            ti += 1;
        } else if let Some((sp, st)) = star {
            pi = sp + 1;
            ti = st + 1;
            star = Some((sp, st + 1));
        } else {
            return false;
        }
    }
    p[pi..].iter().all(|&c| c == '*')
}
