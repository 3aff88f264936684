//! When the wildcard retry runs, what it sends, and which failures surface.

use docsift::{IndexError, SearchError, SearchStage, Searcher};

use super::common::{site_store, ScriptedIndex};

#[test]
fn test_fallback_uses_raw_text_verbatim() {
    let index = ScriptedIndex::new();
    let store = site_store();

    Searcher::new(&index, &store).search("  setup   gui ").unwrap();

    assert_eq!(index.queries(), vec!["+setup +gui", "  setup   gui *"]);
}

#[test]
fn test_pass_through_queries_reach_index_unchanged() {
    let index = ScriptedIndex::new();
    let store = site_store();
    let searcher = Searcher::new(&index, &store);

    searcher.search("title:setup").unwrap();
    searcher.search("setup").unwrap();
    searcher.search("+setup -guide").unwrap();

    assert_eq!(
        index.queries(),
        vec![
            "title:setup",
            "title:setup*",
            "setup",
            "setup*",
            "+setup -guide",
            "+setup -guide*",
        ]
    );
}

#[test]
fn test_syntax_error_in_strict_stage_falls_back() {
    let index = ScriptedIndex::new()
        .with_syntax_error("title:")
        .with_hits("title:*", &["main-docs/intro", "tutorials/setup"]);
    let store = site_store();

    let outcome = Searcher::new(&index, &store).search_detailed("title:").unwrap();

    assert_eq!(outcome.stage, Some(SearchStage::Wildcard));
    assert_eq!(outcome.entries.len(), 2);
}

#[test]
fn test_syntax_errors_in_both_stages_mean_no_results() {
    let index = ScriptedIndex::new()
        .with_syntax_error("setup~")
        .with_syntax_error("setup~*");
    let store = site_store();

    let outcome = Searcher::new(&index, &store).search_detailed("setup~").unwrap();

    assert!(outcome.entries.is_empty());
    assert_eq!(outcome.stage, None);
    assert_eq!(outcome.query, "setup~*");
}

#[test]
fn test_index_fault_in_strict_stage_propagates() {
    let index = ScriptedIndex::new().with_fault("+setup +guide");
    let store = site_store();

    let err = Searcher::new(&index, &store)
        .search("setup guide")
        .unwrap_err();

    match err {
        SearchError::Index {
            stage,
            query,
            source,
        } => {
            assert_eq!(stage, SearchStage::Strict);
            assert_eq!(query, "+setup +guide");
            assert!(matches!(source, IndexError::Unavailable { .. }));
        }
        other => panic!("expected index error, got {other:?}"),
    }
    assert_eq!(index.queries().len(), 1);
}

#[test]
fn test_index_fault_in_wildcard_stage_propagates() {
    let index = ScriptedIndex::new().with_fault("setup guide*");
    let store = site_store();

    let err = Searcher::new(&index, &store)
        .search("setup guide")
        .unwrap_err();

    assert!(matches!(
        err,
        SearchError::Index {
            stage: SearchStage::Wildcard,
            ..
        }
    ));
}
