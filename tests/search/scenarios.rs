//! End-to-end scenarios for the search box: type a phrase, get entries,
//! narrow them by section.

use std::collections::HashMap;

use docsift::{
    filter_results, search, Category, CategorySelection, CategoryTaxonomy, DocMeta, Searcher,
};

use super::common::{entry, refs, ScriptedIndex};

fn intro_store() -> HashMap<String, DocMeta> {
    HashMap::from([
        (
            "main-docs/intro".to_string(),
            DocMeta::new("Introduction", "Start here"),
        ),
        (
            "tutorials/setup".to_string(),
            DocMeta::new("Set up your environment", "Install the toolchain"),
        ),
    ])
}

#[test]
fn test_exact_phrase() {
    let index = ScriptedIndex::new().with_hits("+setup +guide", &["main-docs/intro"]);
    let store = intro_store();

    let results = search("setup guide", &index, &store).unwrap();

    assert_eq!(refs(&results), vec!["main-docs/intro"]);
    assert_eq!(results[0].title(), "Introduction");
    assert_eq!(results[0].meta.excerpt, "Start here");
    assert_eq!(index.queries(), vec!["+setup +guide"]);
}

#[test]
fn test_fallback_triggered() {
    let index = ScriptedIndex::new()
        .with_hits("+setup +guide", &[])
        .with_hits("setup guide*", &["tutorials/setup"]);
    let store = intro_store();

    let results = Searcher::new(&index, &store).search("setup guide").unwrap();

    assert_eq!(refs(&results), vec!["tutorials/setup"]);
    assert_eq!(index.queries(), vec!["+setup +guide", "setup guide*"]);
}

#[test]
fn test_category_filter() {
    let taxonomy = CategoryTaxonomy::new(vec![
        Category::new("docs", "Docs", ["main-docs"]),
        Category::new("tuts", "Tutorials", ["tutorials"]),
    ])
    .unwrap();
    let results = vec![entry("main-docs/intro", 2.0), entry("tutorials/setup", 1.0)];
    let selection = CategorySelection::from_flags([("docs", true), ("tuts", false)]);

    let shown = filter_results(&results, &selection, &taxonomy).unwrap();

    assert_eq!(refs(&shown), vec!["main-docs/intro"]);
}

#[test]
fn test_search_then_filter() {
    let index = ScriptedIndex::new().with_hits(
        "+setup +guide",
        &["tutorials/setup", "main-docs/intro"],
    );
    let store = intro_store();
    let taxonomy = docsift::SiteConfig::default().taxonomy().unwrap();

    let results = search("setup guide", &index, &store).unwrap();
    let mut selection = taxonomy.selection();
    selection.toggle("docs").unwrap();

    assert_eq!(
        refs(&taxonomy.filter(&results, &selection).unwrap()),
        vec!["main-docs/intro"]
    );
    selection.toggle("docs").unwrap();
    assert_eq!(
        refs(&taxonomy.filter(&results, &selection).unwrap()),
        vec!["tutorials/setup", "main-docs/intro"]
    );
}
