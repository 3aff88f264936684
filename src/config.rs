// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site configuration: which sections the search box can filter by.
//!
//! ```json
//! {
//!   "categories": [
//!     { "key": "docs", "label": "Docs", "fragments": ["main-docs"] },
//!     { "key": "tuts", "label": "Tutorials", "fragments": ["tutorials"] }
//!   ]
//! }
//! ```
//!
//! The order of `categories` is the order the toggles are shown in.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryTaxonomy};
use crate::error::ConfigError;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CategoryConfig {
    pub key: String,
    pub label: String,
    pub fragments: Vec<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    pub categories: Vec<CategoryConfig>,
}

impl Default for SiteConfig {
    /// Docs, Tutorials and Reference, keyed off their top-level path.
    fn default() -> Self {
        let category = |key: &str, label: &str, fragment: &str| CategoryConfig {
            key: key.to_string(),
            label: label.to_string(),
            fragments: vec![fragment.to_string()],
        };
        Self {
            categories: vec![
                category("docs", "Docs", "main-docs"),
                category("tuts", "Tutorials", "tutorials"),
                category("ref", "Reference", "reference"),
            ],
        }
    }
}

impl SiteConfig {
    /// Parse and validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.taxonomy()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), categories = config.categories.len(), "site config loaded");
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn taxonomy(&self) -> Result<CategoryTaxonomy, ConfigError> {
        CategoryTaxonomy::new(
            self.categories
                .iter()
                .map(|c| Category::new(c.key.as_str(), c.label.as_str(), c.fragments.iter().cloned()))
                .collect(),
        )
    }
}
