#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use starrylist::{
    app::ListController,
    core::{
        api::CatalogApi,
        favorites::FavoritesStore,
        storage::{KeyValueStore, MemoryStore},
    },
    entities::{CatalogEntry, CatalogPage, PokemonAbility, PokemonDetails, PokemonSprites, PokemonStat},
    error::CatalogError,
};

pub fn species_url(id: usize) -> String {
    format!("https://pokeapi.co/api/v2/pokemon-species/{id}/")
}

pub fn details(id: usize, name: &str) -> PokemonDetails {
    PokemonDetails {
        id: id as i64,
        name: name.to_string(),
        stats: vec![
            PokemonStat {
                name: "hp".to_string(),
                base_stat: 45,
            },
            PokemonStat {
                name: "attack".to_string(),
                base_stat: 49,
            },
        ],
        sprites: PokemonSprites {
            front_default: Some(format!("https://example.invalid/{name}.png")),
        },
        types: vec!["grass".to_string()],
        abilities: vec![PokemonAbility {
            name: "overgrow".to_string(),
            is_hidden: false,
        }],
        height: 7,
        weight: 69,
        moves: vec!["tackle".to_string()],
        species_url: Some(species_url(id)),
    }
}

/// In-memory catalog, details can be made to fail or to answer late
#[derive(Default)]
pub struct MockCatalog {
    entries: Vec<CatalogEntry>,
    details: HashMap<String, PokemonDetails>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    list_fails: AtomicBool,
    pub list_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
}

impl MockCatalog {
    pub fn with_pokemon(names: &[&str]) -> Self {
        let mut catalog = Self::default();
        for (index, name) in names.iter().enumerate() {
            let id = index + 1;
            catalog.entries.push(CatalogEntry::new(
                *name,
                format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
            ));
            catalog.details.insert(name.to_string(), details(id, name));
        }
        catalog
    }

    /// Adds a Pokémon that can be looked up but is not part of the index
    pub fn with_unlisted(mut self, id: usize, name: &str) -> Self {
        self.details.insert(name.to_string(), details(id, name));
        self
    }

    pub fn failing_detail(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn delayed_detail(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    pub fn set_list_failing(&self, failing: bool) {
        self.list_fails.store(failing, Ordering::SeqCst);
    }
}

impl CatalogApi for MockCatalog {
    async fn list_entries(&self, limit: usize, offset: usize) -> Result<CatalogPage, CatalogError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if self.list_fails.load(Ordering::SeqCst) {
            return Err(CatalogError::FetchFailed("connection reset".to_string()));
        }

        Ok(CatalogPage {
            count: self.entries.len() as u64,
            results: self
                .entries
                .iter()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect(),
        })
    }

    async fn get_detail(&self, name: &str) -> Result<PokemonDetails, CatalogError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(name) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing.contains(name) {
            return Err(CatalogError::FetchFailed("404 Not Found".to_string()));
        }

        self.details
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }
}

pub type TestController = ListController<MockCatalog, Arc<MemoryStore>>;

pub fn controller(catalog: Arc<MockCatalog>, page_size: usize) -> (TestController, Arc<MemoryStore>) {
    let storage = Arc::new(MemoryStore::new());
    let controller = controller_with_storage(catalog, Arc::clone(&storage), page_size);
    (controller, storage)
}

pub fn controller_with_storage(
    catalog: Arc<MockCatalog>,
    storage: Arc<MemoryStore>,
    page_size: usize,
) -> TestController {
    ListController::with_shared_api(catalog, FavoritesStore::new(storage), page_size)
}

pub fn seed_favorites(storage: &MemoryStore, raw: &str) {
    storage
        .set(starrylist::core::favorites::FAVORITES_KEY, raw)
        .unwrap();
}
