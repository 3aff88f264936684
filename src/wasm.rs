// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search modal.
//!
//! One object per page: build it from the site's corpus (and optionally its
//! category config), then call `search` on every keystroke and
//! `toggleCategory` on every section toggle. `search` returns the list to
//! render; after a toggle, read it from `displayed()`.
//!
//! ```js
//! const search = new DocsiftSearch(corpus, config);
//! render(search.search("setup guide"));
//! search.toggleCategory("tuts");
//! render(search.displayed());
//! ```

use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::category::category_counts;
use crate::config::SiteConfig;
use crate::corpus::{validate_corpus, Document};
use crate::index::MemoryIndex;
use crate::query::normalize_query;
use crate::search::Searcher;
use crate::session::SearchSession;
use crate::store::DocStore;

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Plain JS objects, never `Map`s. Flattened result entries serialize as maps.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(js_error)
}

#[wasm_bindgen]
pub struct DocsiftSearch {
    index: MemoryIndex,
    store: DocStore,
    session: SearchSession,
}

#[wasm_bindgen]
impl DocsiftSearch {
    /// Build from a corpus array and an optional `{ categories: [...] }` config.
    ///
    /// Without a config, the Docs / Tutorials / Reference defaults apply.
    #[wasm_bindgen(constructor)]
    pub fn new(corpus: JsValue, config: JsValue) -> Result<DocsiftSearch, JsValue> {
        let docs: Vec<Document> = from_value(corpus).map_err(js_error)?;
        validate_corpus(&docs).map_err(js_error)?;

        let config: SiteConfig = if config.is_undefined() || config.is_null() {
            SiteConfig::default()
        } else {
            from_value(config).map_err(js_error)?
        };
        let taxonomy = config.taxonomy().map_err(js_error)?;

        Ok(DocsiftSearch {
            index: MemoryIndex::build(&docs),
            store: DocStore::from_documents(&docs),
            session: SearchSession::new(taxonomy),
        })
    }

    /// Run a search and return the filtered results.
    #[wasm_bindgen]
    pub fn search(&mut self, query: &str) -> Result<JsValue, JsValue> {
        let searcher = Searcher::new(&self.index, &self.store);
        let shown = self
            .session
            .set_query(&searcher, query)
            .map_err(js_error)?;
        to_js(shown)
    }

    /// Flip a category. Returns its new state; read `displayed()` for the list.
    #[wasm_bindgen(js_name = toggleCategory)]
    pub fn toggle_category(&mut self, key: &str) -> Result<bool, JsValue> {
        self.session.toggle_category(key).map_err(js_error)
    }

    #[wasm_bindgen(js_name = clearCategories)]
    pub fn clear_categories(&mut self) {
        self.session.clear_categories();
    }

    /// Current results after the category filter.
    #[wasm_bindgen]
    pub fn displayed(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.displayed())
    }

    /// Toggle labels in display order.
    #[wasm_bindgen]
    pub fn labels(&self) -> Vec<String> {
        self.session
            .labels()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// `[{ key, label, count }]` for the unfiltered results, for toggle badges.
    #[wasm_bindgen]
    pub fn counts(&self) -> Result<JsValue, JsValue> {
        to_js(&category_counts(
            self.session.results(),
            self.session.taxonomy(),
        ))
    }

    /// Show what the strict stage will send to the index.
    #[wasm_bindgen]
    pub fn normalize(query: &str) -> String {
        normalize_query(query)
    }

    #[wasm_bindgen(js_name = docCount)]
    pub fn doc_count(&self) -> usize {
        self.index.len()
    }
}
