// SPDX-License-Identifier: GPL-3.0-only

use std::{collections::HashSet, sync::Arc};

use crate::{
    core::{api::CatalogApi, favorites::FavoritesStore, storage::KeyValueStore},
    entities::{CatalogEntry, FavoriteRecord, PokemonDetails, PokemonInfo, PokemonView},
    error::{CatalogError, StorageError},
    fl,
};

mod notification;
mod request;
pub mod utils;

pub use notification::{NOTIFICATION_DURATION, Notification, NotificationKind};
pub use request::{Applied, PageRequest, PageResponse, SearchRequest, SearchResponse, Ticket};

use request::Generation;
use utils::{LoadMode, page_offset};

/// Drives the list page: pagination, name search and favorites
///
/// Every network operation comes in two halves. `begin_*` updates the view
/// state and returns a request owning everything it needs; `apply_*` hands the
/// response back. Page loads and searches each carry a [`Ticket`] and only the
/// newest ticket of each kind may change the state, so a slow response can
/// never overwrite a newer one. The `async` helpers ([`ListController::load_page`],
/// [`ListController::load_more`], [`ListController::search`]) do both halves
/// in one call.
///
/// Favorite status is never stored on the entries themselves, it is derived
/// from a single set of favorite names whenever the state is read.
pub struct ListController<C, S> {
    api: Arc<C>,
    favorites: FavoritesStore<S>,
    /// Names of all favorites, kept in sync with `favorites`
    favorite_names: HashSet<String>,
    /// Holds the search input value
    query: String,
    /// Last page merged into `items`, 1-based
    page: usize,
    page_size: usize,
    /// Size of the whole catalog as reported by the last page load
    total_count: Option<u64>,
    /// Every loaded Pokémon, in catalog order
    items: Vec<CatalogEntry>,
    /// Pokémon currently shown in the list
    filtered_items: Vec<CatalogEntry>,
    /// Result of the last successful search
    detail: Option<PokemonDetails>,
    error: Option<String>,
    list_generation: Generation,
    search_generation: Generation,
}

impl<C, S> ListController<C, S>
where
    C: CatalogApi,
    S: KeyValueStore,
{
    pub fn new(api: C, favorites: FavoritesStore<S>, page_size: usize) -> Self {
        Self::with_shared_api(Arc::new(api), favorites, page_size)
    }

    pub fn with_shared_api(api: Arc<C>, favorites: FavoritesStore<S>, page_size: usize) -> Self {
        let favorite_names = favorites.names();

        Self {
            api,
            favorites,
            favorite_names,
            query: String::new(),
            page: 1,
            page_size: page_size.max(1),
            total_count: None,
            items: Vec::new(),
            filtered_items: Vec::new(),
            detail: None,
            error: None,
            list_generation: Generation::default(),
            search_generation: Generation::default(),
        }
    }

    //
    // PAGINATION
    //

    /// Starts a fresh load of the first page, superseding any page load in flight
    ///
    /// The page counter only moves back to 1 once the load succeeds.
    pub fn begin_load_page(&mut self) -> PageRequest<C> {
        self.request_page(1, LoadMode::Replace)
    }

    /// Starts loading the page after the last one
    ///
    /// Returns `None` while another page load is in flight or once the whole
    /// catalog has been loaded.
    pub fn begin_load_more(&mut self) -> Option<PageRequest<C>> {
        if self.list_generation.in_flight() {
            tracing::debug!("a page load is already in flight, not loading more");
            return None;
        }

        if !self.has_more() {
            tracing::debug!("every pokémon is already loaded");
            return None;
        }

        Some(self.request_page(self.page + 1, LoadMode::Append))
    }

    fn request_page(&mut self, page: usize, mode: LoadMode) -> PageRequest<C> {
        let ticket = self.list_generation.issue();
        let offset = page_offset(page, self.page_size);

        tracing::debug!(?ticket, ?mode, page, offset, "issuing page load");

        PageRequest {
            api: Arc::clone(&self.api),
            ticket,
            mode,
            page,
            limit: self.page_size,
            offset,
        }
    }

    /// Merges a finished page load into the view state
    pub fn apply_page(&mut self, response: PageResponse) -> Applied {
        if !self.list_generation.settle(response.ticket) {
            tracing::debug!(ticket = ?response.ticket, "dropping stale page response");
            return Applied::Stale;
        }

        match response.result {
            Ok(fetched) => {
                self.page = response.page;
                self.total_count = Some(fetched.count);

                let entries = fetched.details.iter().map(PokemonDetails::to_catalog_entry);
                match response.mode {
                    LoadMode::Replace => self.items = entries.collect(),
                    LoadMode::Append => self.items.extend(entries),
                }

                self.filtered_items = self.items.clone();
                self.error = None;
            }
            Err(err) => {
                // `page` still matches `items`, so a retry asks for the same page
                tracing::warn!(page = response.page, "failed to load the pokémon list: {err}");
                self.error = Some(fl!("list-load-error"));
            }
        }

        Applied::Updated
    }

    /// Loads the first page, replacing the working list
    pub async fn load_page(&mut self) -> Applied {
        let request = self.begin_load_page();
        let response = request.send().await;
        self.apply_page(response)
    }

    /// Loads the next page and appends it to the working list
    pub async fn load_more(&mut self) -> Applied {
        let Some(request) = self.begin_load_more() else {
            return Applied::Skipped;
        };
        let response = request.send().await;
        self.apply_page(response)
    }

    //
    // SEARCH
    //

    /// Sets the search query and, unless it is blank, starts a lookup by name
    ///
    /// A blank query cancels any search in flight, clears the detail view and
    /// shows the whole working list again; `None` is returned in that case.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchRequest<C>> {
        self.query = query.to_string();

        let name = query.trim().to_lowercase();
        if name.is_empty() {
            self.search_generation.invalidate();
            self.reset_search();
            return None;
        }

        let ticket = self.search_generation.issue();
        tracing::debug!(?ticket, name = %name, "issuing search");

        Some(SearchRequest {
            api: Arc::clone(&self.api),
            ticket,
            name,
        })
    }

    /// Shows the result of a finished search
    pub fn apply_search(&mut self, response: SearchResponse) -> Applied {
        if !self.search_generation.settle(response.ticket) {
            tracing::debug!(ticket = ?response.ticket, "dropping stale search response");
            return Applied::Stale;
        }

        match response.result {
            Ok(details) => {
                self.detail = Some(details);
                self.error = None;
                self.filtered_items.clear();
            }
            Err(err) => {
                let err = match err {
                    CatalogError::FetchFailed(reason) => {
                        tracing::debug!("search request failed: {reason}");
                        CatalogError::NotFound(response.name)
                    }
                    not_found => not_found,
                };
                tracing::info!("{err}");

                self.error = Some(fl!("pokemon-not-found"));
                self.detail = None;
            }
        }

        Applied::Updated
    }

    /// Searches a Pokémon by its exact name, a blank query shows the list again
    pub async fn search(&mut self, query: &str) -> Applied {
        let Some(request) = self.begin_search(query) else {
            return Applied::Updated;
        };
        let response = request.send().await;
        self.apply_search(response)
    }

    fn reset_search(&mut self) {
        self.detail = None;
        self.filtered_items = self.items.clone();
    }

    //
    // FAVORITES
    //

    /// Adds the Pokémon to the favorites, or removes it if it already was one
    pub fn toggle_favorite(&mut self, name: &str) -> Result<Notification, StorageError> {
        let notification = if self.favorites.is_favorite(name) {
            self.favorites.remove(name)?;
            self.favorite_names.remove(name);
            Notification::favorite_removed(name)
        } else {
            let url = self.known_url(name).to_string();
            self.favorites.add(FavoriteRecord::new(name, url))?;
            self.favorite_names.insert(name.to_string());
            Notification::favorite_added(name)
        };

        tracing::info!(name, kind = ?notification.kind, "toggled favorite");
        Ok(notification)
    }

    /// All persisted favorites
    pub fn favorites(&self) -> Vec<FavoriteRecord> {
        self.favorites.list()
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorite_names.contains(name)
    }

    /// Re-reads the favorite names from storage
    pub fn reload_favorites(&mut self) {
        self.favorite_names = self.favorites.names();
    }

    /// Species url we know for `name`, empty if the Pokémon is not displayed
    fn known_url(&self, name: &str) -> &str {
        self.items
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.url.as_str())
            .or_else(|| {
                self.detail
                    .as_ref()
                    .filter(|detail| detail.name == name)
                    .map(PokemonDetails::species_url)
            })
            .unwrap_or_default()
    }

    //
    // VIEW STATE
    //

    fn info(&self, entry: &CatalogEntry) -> PokemonInfo {
        PokemonInfo {
            name: entry.name.clone(),
            url: entry.url.clone(),
            is_favorite: self.is_favorite(&entry.name),
        }
    }

    /// Every loaded Pokémon
    pub fn items(&self) -> Vec<PokemonInfo> {
        self.items.iter().map(|entry| self.info(entry)).collect()
    }

    /// The Pokémon the list currently shows
    pub fn filtered_items(&self) -> Vec<PokemonInfo> {
        self.filtered_items
            .iter()
            .map(|entry| self.info(entry))
            .collect()
    }

    /// The Pokémon found by the last search, if any
    pub fn detail(&self) -> Option<PokemonView<'_>> {
        self.detail.as_ref().map(|details| PokemonView {
            details,
            is_favorite: self.is_favorite(&details.name),
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Whether the catalog has entries that are not loaded yet
    pub fn has_more(&self) -> bool {
        match self.total_count {
            Some(total) => (self.items.len() as u64) < total,
            None => true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.list_generation.in_flight() || self.search_generation.in_flight()
    }

    /// Message describing the last failure, if the last operation failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
