//! Search protocol properties.
//!
//! - At most two index queries, and the second is always `raw + "*"`
//! - The second query only runs when the first produced nothing
//! - Strict phrase hits contain every word of the phrase
//! - The same query over the same data gives the same answer

use docsift::{normalize_query, wildcard_query, DocStore, MemoryIndex, SearchStage, Searcher};
use proptest::prelude::*;

use super::common::{make_doc, ScriptedIndex};

const VOCABULARY: [&str; 10] = [
    "runtime", "pallet", "setup", "guide", "node", "storage", "event", "install", "chain", "api",
];

fn word_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(VOCABULARY.to_vec())
}

fn corpus_strategy() -> impl Strategy<Value = Vec<docsift::Document>> {
    prop::collection::vec(
        (
            prop::collection::vec(word_strategy(), 1..3),
            prop::collection::vec(word_strategy(), 0..8),
        ),
        1..8,
    )
    .prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, (title, body))| {
                make_doc(&format!("main-docs/page-{i}"), &title.join(" "), &body.join(" "))
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..4).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the fallback sends the raw text plus `*`, never the
    /// normalized form, and only after the strict query came back empty.
    #[test]
    fn prop_fallback_query_is_raw_plus_wildcard(raw in "[a-z ]{0,20}") {
        let index = ScriptedIndex::new();
        let store = DocStore::new();

        let results = Searcher::new(&index, &store).search(&raw).unwrap();

        prop_assert!(results.is_empty());
        prop_assert_eq!(index.queries(), vec![normalize_query(&raw), wildcard_query(&raw)]);
    }

    /// Property: a strict hit stops the search after one query.
    #[test]
    fn prop_strict_hit_is_final(raw in "[a-z]{1,6}( [a-z]{1,6}){0,2}") {
        let strict = normalize_query(&raw);
        let index = ScriptedIndex::new().with_hits(&strict, &["main-docs/page"]);
        let mut store = DocStore::new();
        store.insert("main-docs/page", docsift::DocMeta::new("Page", ""));

        let outcome = Searcher::new(&index, &store).search_detailed(&raw).unwrap();

        prop_assert_eq!(outcome.stage, Some(SearchStage::Strict));
        prop_assert_eq!(index.queries(), vec![strict]);
    }

    /// Property: every strict hit for a plain phrase contains all its words.
    #[test]
    fn prop_strict_hits_contain_every_word(
        docs in corpus_strategy(),
        raw in query_strategy(),
    ) {
        let index = MemoryIndex::build(&docs);
        let store = DocStore::from_documents(&docs);

        let outcome = Searcher::new(&index, &store).search_detailed(&raw).unwrap();

        if outcome.stage == Some(SearchStage::Strict) {
            for entry in &outcome.entries {
                let doc = docs
                    .iter()
                    .find(|d| d.slug == entry.reference.as_str())
                    .unwrap();
                let words: Vec<&str> = doc.title.split(' ').chain(doc.text.split(' ')).collect();
                for word in raw.split_whitespace() {
                    prop_assert!(words.contains(&word), "{} missing from {}", word, doc.slug);
                }
            }
        }
    }

    /// Property: searching is deterministic.
    #[test]
    fn prop_search_idempotent(docs in corpus_strategy(), raw in query_strategy()) {
        let index = MemoryIndex::build(&docs);
        let store = DocStore::from_documents(&docs);
        let searcher = Searcher::new(&index, &store);

        prop_assert_eq!(searcher.search(&raw).unwrap(), searcher.search(&raw).unwrap());
    }
}
