//! A search box's state across keystrokes and toggles.

use docsift::{SearchSession, Searcher};

use super::common::{entry, refs, site_taxonomy, SITE_INDEX, SITE_STORE};

#[test]
fn test_typing_then_toggling() {
    let searcher = Searcher::new(&*SITE_INDEX, &*SITE_STORE);
    let mut session = SearchSession::new(site_taxonomy());

    session.set_query(&searcher, "runtime").unwrap();
    assert_eq!(session.displayed().len(), 3);

    assert!(session.toggle_category("docs").unwrap());
    assert_eq!(refs(session.displayed()), vec!["main-docs/build/events"]);
    assert_eq!(session.results().len(), 3);

    // the filter stays on while the query changes
    session.set_query(&searcher, "setup guide").unwrap();
    assert_eq!(refs(session.displayed()), vec!["main-docs/intro"]);

    session.set_query(&searcher, "tutorial").unwrap();
    assert!(session.displayed().is_empty());

    session.clear_categories();
    assert_eq!(session.displayed().len(), 2);
}

#[test]
fn test_out_of_order_completion() {
    let mut session = SearchSession::new(site_taxonomy());

    let first = session.begin("r");
    let second = session.begin("ru");
    let third = session.begin("run");
    assert!(third.generation() > second.generation());

    assert!(session.complete(third, vec![entry("tutorials/first-pallet", 1.0)]));
    assert!(!session.complete(second, vec![entry("reference/runtime-api", 1.0)]));
    assert!(!session.complete(first, vec![entry("main-docs/intro", 1.0)]));

    assert_eq!(session.query(), "run");
    assert_eq!(refs(session.displayed()), vec!["tutorials/first-pallet"]);
}

#[test]
fn test_toggle_before_any_search() {
    let mut session = SearchSession::new(site_taxonomy());
    session.set_category("ref", true).unwrap();
    assert!(session.displayed().is_empty());

    let ticket = session.begin("api");
    session.complete(
        ticket,
        vec![entry("main-docs/intro", 2.0), entry("reference/runtime-api", 1.0)],
    );
    assert_eq!(refs(session.displayed()), vec!["reference/runtime-api"]);
}
