// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// A single row of the paginated Pokémon index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One slice of the Pokémon index, `count` is the size of the whole catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub count: u64,
    pub results: Vec<CatalogEntry>,
}
