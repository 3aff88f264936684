//! Normalizer and parser properties.
//!
//! - Reserved syntax and single words reach the index byte-for-byte
//! - Plain phrases become one required clause per word
//! - Normalizing twice changes nothing
//! - The parser never panics, whatever it is fed

use docsift::query::{classify, is_reserved, QueryShape, RESERVED_CHARS};
use docsift::{normalize_query, parse_query, wildcard_query};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9éü]{1,8}").unwrap()
}

fn separator_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\n]{1,3}").unwrap()
}

/// Two or more plain words with arbitrary whitespace around and between them.
fn phrase_strategy() -> impl Strategy<Value = (Vec<String>, String)> {
    (
        prop::collection::vec((word_strategy(), separator_strategy()), 2..6),
        prop::string::string_regex("[ ]{0,2}").unwrap(),
    )
        .prop_map(|(parts, lead)| {
            let words: Vec<String> = parts.iter().map(|(w, _)| w.clone()).collect();
            let mut raw = lead;
            for (word, sep) in parts {
                raw.push_str(&word);
                raw.push_str(&sep);
            }
            (words, raw)
        })
}

fn reserved_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(RESERVED_CHARS.to_vec())
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: any input with a reserved character comes back unchanged.
    #[test]
    fn prop_reserved_passes_through(
        (_, raw) in phrase_strategy(),
        reserved in reserved_strategy(),
        at in any::<prop::sample::Index>(),
    ) {
        let mut chars: Vec<char> = raw.chars().collect();
        chars.insert(at.index(chars.len() + 1), reserved);
        let raw: String = chars.into_iter().collect();

        prop_assert_eq!(normalize_query(&raw), raw);
    }

    /// Property: a single word, however padded, comes back unchanged.
    #[test]
    fn prop_single_term_passes_through(
        word in word_strategy(),
        lead in "[ \t]{0,3}",
        trail in "[ \t]{0,3}",
    ) {
        let raw = format!("{lead}{word}{trail}");
        prop_assert_eq!(classify(&raw), QueryShape::SingleTerm);
        prop_assert_eq!(normalize_query(&raw), raw);
    }

    /// Property: a plain phrase becomes `+w1 +w2 ...`, one clause per word.
    #[test]
    fn prop_phrase_requires_every_word((words, raw) in phrase_strategy()) {
        let expected = words
            .iter()
            .map(|w| format!("+{w}"))
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(normalize_query(&raw), expected);
        prop_assert_eq!(classify(&raw), QueryShape::Phrase(words.len()));
    }

    /// Property: normalization is idempotent.
    #[test]
    fn prop_normalize_idempotent(raw in "\\PC{0,40}") {
        let once = normalize_query(&raw);
        prop_assert_eq!(normalize_query(&once), once.clone());
    }

    /// Property: a normalized phrase is accepted by the dialect parser with
    /// every clause required.
    #[test]
    fn prop_normalized_phrase_parses((words, raw) in phrase_strategy()) {
        let parsed = parse_query(&normalize_query(&raw)).unwrap();
        prop_assert_eq!(parsed.clauses.len(), words.len());
        prop_assert_eq!(parsed.required().count(), words.len());
    }

    /// Property: the fallback query is the raw text plus one `*`.
    #[test]
    fn prop_wildcard_appends_one_marker(raw in "\\PC{0,40}") {
        let wildcard = wildcard_query(&raw);
        prop_assert!(wildcard.ends_with('*'));
        prop_assert_eq!(&wildcard[..raw.len()], raw.as_str());
        prop_assert_eq!(wildcard.len(), raw.len() + 1);
    }

    /// Property: the parser returns an error instead of panicking.
    #[test]
    fn prop_parse_never_panics(raw in "[a-z +\\-*:~^0-9éü\t]{0,30}") {
        let _ = parse_query(&raw);
    }

    /// Property: every reserved character really is reserved.
    #[test]
    fn prop_reserved_chars_agree(c in any::<char>()) {
        prop_assert_eq!(is_reserved(c), RESERVED_CHARS.contains(&c));
    }
}
