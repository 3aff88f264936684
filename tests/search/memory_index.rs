//! The full pipeline against the bundled in-memory index.

use docsift::{DocStore, QueryIndex, SearchError, SearchStage, Searcher, StoreError};

use super::common::{
    refs, site_corpus, site_store, site_taxonomy, CorruptStore, SITE_INDEX, SITE_STORE,
};

/// A store built from the corpus minus `dropped`, as after a stale deploy.
fn store_without(dropped: &str) -> DocStore {
    let docs: Vec<_> = site_corpus()
        .into_iter()
        .filter(|doc| doc.slug != dropped)
        .collect();
    DocStore::from_documents(&docs)
}

fn searcher() -> Searcher<'static, docsift::MemoryIndex, docsift::DocStore> {
    Searcher::new(&*SITE_INDEX, &*SITE_STORE)
}

#[test]
fn test_phrase_requires_every_word() {
    let outcome = searcher().search_detailed("setup guide").unwrap();

    assert_eq!(outcome.stage, Some(SearchStage::Strict));
    // tutorials/setup mentions setup but never guide
    assert_eq!(refs(&outcome.entries), vec!["main-docs/intro"]);
    assert_eq!(outcome.entries[0].title(), "Introduction");
}

#[test]
fn test_half_typed_word_recovers_through_wildcard() {
    let outcome = searcher().search_detailed("setup guid").unwrap();

    assert_eq!(outcome.stage, Some(SearchStage::Wildcard));
    assert_eq!(outcome.query, "setup guid*");
    assert_eq!(
        refs(&outcome.entries),
        vec!["main-docs/intro", "tutorials/setup"]
    );
}

#[test]
fn test_title_matches_rank_first() {
    let results = searcher().search("runtime").unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].reference.as_str(), "reference/runtime-api");
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_field_scoped_query() {
    let results = searcher().search("title:pallet").unwrap();
    assert_eq!(refs(&results), vec!["tutorials/first-pallet"]);
}

#[test]
fn test_prohibited_term_excludes() {
    let results = searcher().search("+runtime -pallets").unwrap();
    assert_eq!(
        refs(&results),
        vec!["reference/runtime-api", "tutorials/first-pallet"]
    );
}

#[test]
fn test_edit_distance_tolerates_typos() {
    let results = searcher().search("runtme~1").unwrap();
    assert_eq!(results.len(), 3);
    assert!(searcher().search("runtme").unwrap().is_empty());
}

#[test]
fn test_hyphenated_input_splits_terms() {
    let results = searcher().search("step-by-step").unwrap();
    assert_eq!(refs(&results), vec!["tutorials/setup"]);
}

#[test]
fn test_incomplete_syntax_is_not_an_error() {
    assert!(SITE_INDEX.query("setup~").is_err());
    let outcome = searcher().search_detailed("setup~").unwrap();
    assert!(outcome.entries.is_empty());
    assert_eq!(outcome.stage, None);
}

#[test]
fn test_empty_query_lists_every_document() {
    let results = searcher().search("").unwrap();
    assert_eq!(results.len(), SITE_INDEX.len());
}

#[test]
fn test_search_then_filter_by_section() {
    let taxonomy = site_taxonomy();
    let results = searcher().search("runtime").unwrap();

    let mut selection = taxonomy.selection();
    selection.toggle("tuts").unwrap();
    assert_eq!(
        refs(&taxonomy.filter(&results, &selection).unwrap()),
        vec!["tutorials/first-pallet"]
    );

    selection.toggle("docs").unwrap();
    let shown = taxonomy.filter(&results, &selection).unwrap();
    assert_eq!(shown.len(), 2);
    assert!(shown.iter().all(|e| !e.reference.contains("reference")));
}

#[test]
fn test_repeated_search_is_stable() {
    let first = searcher().search("pallet runtime").unwrap();
    let second = searcher().search("pallet runtime").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_page_missing_from_store_is_skipped() {
    let store = store_without("reference/runtime-api");
    let outcome = Searcher::new(&*SITE_INDEX, &store)
        .search_detailed("runtime")
        .unwrap();

    assert_eq!(outcome.stage, Some(SearchStage::Strict));
    assert_eq!(outcome.entries.len(), 2);
    assert!(!refs(&outcome.entries).contains(&"reference/runtime-api"));
    assert_eq!(outcome.skipped, 1);
}

#[test]
fn test_only_strict_hit_missing_falls_back() {
    let store = store_without("main-docs/intro");
    let outcome = Searcher::new(&*SITE_INDEX, &store)
        .search_detailed("setup guide")
        .unwrap();

    assert_eq!(outcome.stage, Some(SearchStage::Wildcard));
    assert_eq!(refs(&outcome.entries), vec!["tutorials/setup"]);
    // intro is skipped once per stage
    assert_eq!(outcome.skipped, 2);
}

#[test]
fn test_corrupt_store_entry_surfaces() {
    let store = CorruptStore::new(site_store(), &["main-docs/intro"]);
    let err = Searcher::new(&*SITE_INDEX, &store)
        .search("setup guide")
        .unwrap_err();

    assert!(matches!(
        err,
        SearchError::Store(StoreError::Corrupted { reference, .. }) if reference == "main-docs/intro"
    ));
}
