//! Category filter properties.
//!
//! - An empty selection returns the input unchanged
//! - Output is an order-preserving subsequence of the input
//! - An entry survives exactly when some active category matches it

use docsift::{filter_results, CategorySelection, ResultEntry};
use proptest::prelude::*;

use super::common::{entry, site_taxonomy};

const SECTIONS: [&str; 5] = ["main-docs", "tutorials", "reference", "blog", "v2/tutorials"];

fn results_strategy() -> impl Strategy<Value = Vec<ResultEntry>> {
    prop::collection::vec(
        (prop::sample::select(SECTIONS.to_vec()), "[a-z]{1,6}", 0.0f64..20.0),
        0..12,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(section, page, score)| entry(&format!("{section}/{page}"), score))
            .collect()
    })
}

fn selection_strategy() -> impl Strategy<Value = CategorySelection> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(docs, tuts, reference)| {
        CategorySelection::from_flags([("docs", docs), ("tuts", tuts), ("ref", reference)])
    })
}

/// Is `sub` a subsequence of `full`, compared by reference?
fn is_subsequence(sub: &[ResultEntry], full: &[ResultEntry]) -> bool {
    let mut rest = full.iter();
    sub.iter()
        .all(|s| rest.any(|f| f.reference == s.reference))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: nothing active means nothing filtered.
    #[test]
    fn prop_empty_selection_is_identity(results in results_strategy()) {
        let taxonomy = site_taxonomy();
        let shown = filter_results(&results, &taxonomy.selection(), &taxonomy).unwrap();
        prop_assert_eq!(shown, results);
    }

    /// Property: filtering only removes, never reorders or invents.
    #[test]
    fn prop_filter_is_stable_subsequence(
        results in results_strategy(),
        selection in selection_strategy(),
    ) {
        let taxonomy = site_taxonomy();
        let shown = filter_results(&results, &selection, &taxonomy).unwrap();
        prop_assert!(shown.len() <= results.len());
        prop_assert!(is_subsequence(&shown, &results));
    }

    /// Property: with at least one category on, an entry is kept iff some
    /// active category's fragment occurs in its reference.
    #[test]
    fn prop_filter_keeps_exactly_matching(
        results in results_strategy(),
        selection in selection_strategy(),
    ) {
        prop_assume!(!selection.is_empty());
        let taxonomy = site_taxonomy();
        let shown = filter_results(&results, &selection, &taxonomy).unwrap();

        let expected: Vec<&ResultEntry> = results
            .iter()
            .filter(|e| {
                taxonomy
                    .iter()
                    .filter(|c| selection.is_active(&c.key))
                    .any(|c| c.fragments.iter().any(|f| e.reference.as_str().contains(f.as_str())))
            })
            .collect();
        prop_assert_eq!(shown.iter().collect::<Vec<_>>(), expected);
    }

    /// Property: filtering twice with the same selection is a no-op.
    #[test]
    fn prop_filter_idempotent(
        results in results_strategy(),
        selection in selection_strategy(),
    ) {
        let taxonomy = site_taxonomy();
        let once = filter_results(&results, &selection, &taxonomy).unwrap();
        let twice = filter_results(&once, &selection, &taxonomy).unwrap();
        prop_assert_eq!(once, twice);
    }
}
