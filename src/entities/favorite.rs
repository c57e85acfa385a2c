// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// What we persist about a favorite Pokémon
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl FavoriteRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
