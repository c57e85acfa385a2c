// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use super::CatalogEntry;

/// Everything we keep about a single Pokémon fetched by name
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetails {
    pub id: i64,
    pub name: String,
    pub stats: Vec<PokemonStat>,
    pub sprites: PokemonSprites,
    pub types: Vec<String>,
    pub abilities: Vec<PokemonAbility>,
    pub height: i64,
    pub weight: i64,
    pub moves: Vec<String>,
    pub species_url: Option<String>,
}

impl Debug for PokemonDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokemonDetails")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl PokemonDetails {
    /// Returns the total value of all the stats of the Pokémon
    pub fn total_stats(&self) -> i64 {
        self.stats.iter().map(|s| s.base_stat).sum()
    }

    /// Species url of the Pokémon, empty if PokéApi did not send one
    pub fn species_url(&self) -> &str {
        self.species_url.as_deref().unwrap_or_default()
    }

    /// Reduces the details to the entry shown on the list page
    pub fn to_catalog_entry(&self) -> CatalogEntry {
        CatalogEntry::new(self.name.clone(), self.species_url())
    }
}

/// Pokémon base stat, keyed by the PokéApi stat name (`hp`, `special-attack`...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub name: String,
    pub base_stat: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub name: String,
    pub is_hidden: bool,
}
