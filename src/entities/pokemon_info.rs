// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

use super::PokemonDetails;

/// Simple owned data structure, for displaying the Pokémon in the list page (main page)
#[derive(Clone, PartialEq, Eq)]
pub struct PokemonInfo {
    pub name: String,
    pub url: String,
    pub is_favorite: bool,
}

impl Debug for PokemonInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokemonInfo")
            .field("name", &self.name)
            .field("is_favorite", &self.is_favorite)
            .finish()
    }
}

/// The Pokémon currently shown on the details page
#[derive(Debug, Clone, Copy)]
pub struct PokemonView<'a> {
    pub details: &'a PokemonDetails,
    pub is_favorite: bool,
}
