// SPDX-License-Identifier: GPL-3.0-only

mod catalog_entry;
mod favorite;
mod pokemon_details;
mod pokemon_info;

pub use catalog_entry::{CatalogEntry, CatalogPage};
pub use favorite::FavoriteRecord;
pub use pokemon_details::{PokemonAbility, PokemonDetails, PokemonSprites, PokemonStat};
pub use pokemon_info::{PokemonInfo, PokemonView};
