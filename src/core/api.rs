// SPDX-License-Identifier: GPL-3.0-only

use std::{future::Future, sync::Arc};

use rustemon::client::{CacheMode, MokaManager, RustemonClient, RustemonClientBuilder};

use crate::{
    entities::{
        CatalogEntry, CatalogPage, PokemonAbility, PokemonDetails, PokemonSprites, PokemonStat,
    },
    error::CatalogError,
};

/// Read access to the remote Pokémon catalog
///
/// Both calls are plain pass-through requests: no retries, no timeouts and no
/// validation beyond decoding. Any failure is reported as a [`CatalogError`].
pub trait CatalogApi: Send + Sync {
    /// Retrieves `limit` index entries starting at `offset`
    fn list_entries(
        &self,
        limit: usize,
        offset: usize,
    ) -> impl Future<Output = Result<CatalogPage, CatalogError>> + Send;

    /// Retrieves the full record of a single Pokémon by its (lowercase) name
    fn get_detail(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<PokemonDetails, CatalogError>> + Send;
}

/// [`CatalogApi`] backed by the public PokéApi through rustemon
#[derive(Debug, Clone)]
pub struct PokeApi {
    client: Arc<RustemonClient>,
}

impl PokeApi {
    pub fn new() -> Result<Self, CatalogError> {
        let client = RustemonClientBuilder::default()
            .with_manager(MokaManager::default())
            .with_mode(CacheMode::NoStore)
            .try_build()
            .map_err(|err| CatalogError::FetchFailed(err.to_string()))?;

        Ok(Self {
            client: Arc::new(client),
        })
    }
}

impl CatalogApi for PokeApi {
    async fn list_entries(&self, limit: usize, offset: usize) -> Result<CatalogPage, CatalogError> {
        tracing::debug!(limit, offset, "fetching pokémon index page");

        let page = rustemon::pokemon::pokemon::get_page_with_param(
            offset as i64,
            limit as i64,
            &self.client,
        )
        .await?;

        Ok(CatalogPage {
            count: u64::try_from(page.count).unwrap_or_default(),
            results: page
                .results
                .into_iter()
                .map(|entry| CatalogEntry::new(entry.name, entry.url))
                .collect(),
        })
    }

    async fn get_detail(&self, name: &str) -> Result<PokemonDetails, CatalogError> {
        tracing::debug!(name, "fetching pokémon details");

        let pokemon = rustemon::pokemon::pokemon::get_by_name(name, &self.client).await?;
        Ok(parse_pokemon(pokemon))
    }
}

/// Parse Rustemon data to our own format
fn parse_pokemon(pokemon: rustemon::model::pokemon::Pokemon) -> PokemonDetails {
    let species_url = Some(pokemon.species.url).filter(|url| !url.is_empty());

    PokemonDetails {
        id: pokemon.id,
        name: pokemon.name,
        stats: pokemon
            .stats
            .into_iter()
            .map(|stat| PokemonStat {
                name: stat.stat.name,
                base_stat: stat.base_stat,
            })
            .collect(),
        sprites: PokemonSprites {
            front_default: pokemon.sprites.front_default,
        },
        types: pokemon
            .types
            .into_iter()
            .map(|types| types.type_.name)
            .collect(),
        abilities: pokemon
            .abilities
            .into_iter()
            .map(|a| PokemonAbility {
                name: a.ability.name,
                is_hidden: a.is_hidden,
            })
            .collect(),
        height: pokemon.height,
        weight: pokemon.weight,
        moves: pokemon.moves.into_iter().map(|m| m.move_.name).collect(),
        species_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn client_builds_without_touching_the_network() {
        assert!(PokeApi::new().is_ok());
    }
}
