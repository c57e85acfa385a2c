// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{core::storage::KeyValueStore, entities::FavoriteRecord, error::StorageError};

/// Storage key holding the favorites blob
pub const FAVORITES_KEY: &str = "pokemon_favorites";

/// Current version of the persisted favorites layout
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct StoredFavoritesRef<'a> {
    version: u32,
    favorites: &'a [FavoriteRecord],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredFavorites {
    Versioned {
        version: u32,
        favorites: Vec<FavoriteRecord>,
    },
    /// Layout written before the blob was versioned: a bare array of records
    Legacy(Vec<FavoriteRecord>),
}

/// Favorite Pokémon kept in a [`KeyValueStore`] under [`FAVORITES_KEY`]
///
/// Every operation reads the whole list and writes operations rewrite all of
/// it, which is fine for the few dozen favorites a user realistically has.
#[derive(Debug)]
pub struct FavoritesStore<S> {
    storage: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All favorites in insertion order
    ///
    /// A missing or malformed blob reads as no favorites, a failed read is an error.
    pub fn load(&self) -> Result<Vec<FavoriteRecord>, StorageError> {
        Ok(self
            .storage
            .get(FAVORITES_KEY)?
            .map(|raw| decode(&raw))
            .unwrap_or_default())
    }

    /// Same as [`FavoritesStore::load`], but a failed read shows up as no favorites
    pub fn list(&self) -> Vec<FavoriteRecord> {
        self.load().unwrap_or_else(|err| {
            tracing::warn!("failed to read favorites, treating them as empty: {err}");
            Vec::new()
        })
    }

    /// Adds the record unless a favorite with the same name already exists.
    /// Returns whether the record was inserted.
    pub fn add(&self, record: FavoriteRecord) -> Result<bool, StorageError> {
        let mut favorites = self.load()?;
        if favorites.iter().any(|fav| fav.name == record.name) {
            return Ok(false);
        }

        favorites.push(record);
        self.save(&favorites)?;
        Ok(true)
    }

    /// Removes the favorite with the given name. Returns whether one was removed.
    pub fn remove(&self, name: &str) -> Result<bool, StorageError> {
        let mut favorites = self.load()?;
        let before = favorites.len();
        favorites.retain(|fav| fav.name != name);

        if favorites.len() == before {
            return Ok(false);
        }

        self.save(&favorites)?;
        Ok(true)
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.list().iter().any(|fav| fav.name == name)
    }

    /// Names of every favorite
    pub fn names(&self) -> HashSet<String> {
        self.list().into_iter().map(|fav| fav.name).collect()
    }

    fn save(&self, favorites: &[FavoriteRecord]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(&StoredFavoritesRef {
            version: SCHEMA_VERSION,
            favorites,
        })?;
        self.storage.set(FAVORITES_KEY, &blob)
    }
}

/// Decodes a stored favorites blob, anything unreadable counts as no favorites
fn decode(raw: &str) -> Vec<FavoriteRecord> {
    let favorites = match serde_json::from_str::<StoredFavorites>(raw) {
        Ok(StoredFavorites::Versioned { version, favorites }) => {
            if version > SCHEMA_VERSION {
                tracing::debug!(version, "reading favorites written by a newer version");
            }
            favorites
        }
        Ok(StoredFavorites::Legacy(favorites)) => favorites,
        Err(err) => {
            tracing::warn!("stored favorites are malformed, ignoring them: {err}");
            return Vec::new();
        }
    };

    // Keep the first record of every name
    let mut seen = HashSet::new();
    favorites
        .into_iter()
        .filter(|fav| seen.insert(fav.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
    };

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::storage::MemoryStore;

    fn store() -> (Arc<MemoryStore>, FavoritesStore<Arc<MemoryStore>>) {
        let storage = Arc::new(MemoryStore::new());
        (Arc::clone(&storage), FavoritesStore::new(storage))
    }

    /// Memory store whose reads can be switched to fail
    #[derive(Default)]
    struct UnreadableStore {
        inner: MemoryStore,
        reads_fail: AtomicBool,
    }

    impl KeyValueStore for UnreadableStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.reads_fail.load(Ordering::SeqCst) {
                return Err(StorageError::Io(io::Error::other("disk unavailable")));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    fn unreadable_store_with(
        names: &[&str],
    ) -> (Arc<UnreadableStore>, FavoritesStore<Arc<UnreadableStore>>) {
        let storage = Arc::new(UnreadableStore::default());
        let favorites = FavoritesStore::new(Arc::clone(&storage));
        for name in names {
            favorites.add(FavoriteRecord::new(*name, "")).unwrap();
        }
        storage.reads_fail.store(true, Ordering::SeqCst);
        (storage, favorites)
    }

    #[test]
    fn empty_storage_has_no_favorites() {
        let (_, favorites) = store();
        assert!(favorites.list().is_empty());
        assert!(!favorites.is_favorite("pikachu"));
    }

    #[test]
    fn add_then_is_favorite() {
        let (_, favorites) = store();

        assert!(favorites.add(FavoriteRecord::new("pikachu", "")).unwrap());
        assert!(favorites.is_favorite("pikachu"));
    }

    #[test]
    fn add_is_idempotent() {
        let (_, favorites) = store();

        favorites.add(FavoriteRecord::new("pikachu", "a")).unwrap();
        assert!(!favorites.add(FavoriteRecord::new("pikachu", "b")).unwrap());

        assert_eq!(favorites.list(), vec![FavoriteRecord::new("pikachu", "a")]);
    }

    #[test]
    fn remove_then_is_not_favorite() {
        let (_, favorites) = store();
        favorites.add(FavoriteRecord::new("pikachu", "")).unwrap();
        favorites.add(FavoriteRecord::new("mew", "")).unwrap();

        assert!(favorites.remove("pikachu").unwrap());
        assert!(!favorites.is_favorite("pikachu"));
        assert!(favorites.is_favorite("mew"));
    }

    #[test]
    fn remove_absent_does_not_write() {
        let (storage, favorites) = store();

        assert!(!favorites.remove("pikachu").unwrap());
        assert_eq!(storage.get(FAVORITES_KEY).unwrap(), None);
    }

    #[test]
    fn blob_is_versioned() {
        let (storage, favorites) = store();
        favorites
            .add(FavoriteRecord::new("bulbasaur", "https://pokeapi.co/api/v2/pokemon-species/1/"))
            .unwrap();

        let raw = storage.get(FAVORITES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["version"], SCHEMA_VERSION);
        assert_eq!(value["favorites"][0]["name"], "bulbasaur");
    }

    #[test]
    fn legacy_array_is_still_read() {
        let (storage, favorites) = store();
        storage
            .set(FAVORITES_KEY, r#"[{"name":"pikachu","url":""},{"name":"eevee"}]"#)
            .unwrap();

        assert_eq!(
            favorites.list(),
            vec![
                FavoriteRecord::new("pikachu", ""),
                FavoriteRecord::new("eevee", "")
            ]
        );
    }

    #[test]
    fn malformed_blob_reads_as_empty_and_is_replaced_on_add() {
        let (storage, favorites) = store();
        storage.set(FAVORITES_KEY, "{not json").unwrap();

        assert!(favorites.list().is_empty());

        favorites.add(FavoriteRecord::new("mew", "")).unwrap();
        assert_eq!(favorites.list(), vec![FavoriteRecord::new("mew", "")]);
    }

    #[test]
    fn duplicate_names_in_storage_collapse() {
        let (storage, favorites) = store();
        storage
            .set(
                FAVORITES_KEY,
                r#"{"version":1,"favorites":[{"name":"mew","url":"1"},{"name":"mew","url":"2"}]}"#,
            )
            .unwrap();

        assert_eq!(favorites.list(), vec![FavoriteRecord::new("mew", "1")]);
    }

    #[test]
    fn failed_read_is_not_treated_as_empty_on_add() {
        let (storage, favorites) = unreadable_store_with(&["pikachu", "mew"]);

        assert!(matches!(
            favorites.add(FavoriteRecord::new("eevee", "")),
            Err(StorageError::Io(_))
        ));
        assert!(favorites.list().is_empty());

        storage.reads_fail.store(false, Ordering::SeqCst);
        assert_eq!(
            favorites.list(),
            vec![FavoriteRecord::new("pikachu", ""), FavoriteRecord::new("mew", "")]
        );
    }

    #[test]
    fn failed_read_is_not_treated_as_empty_on_remove() {
        let (storage, favorites) = unreadable_store_with(&["pikachu", "mew"]);

        assert!(matches!(favorites.remove("mew"), Err(StorageError::Io(_))));
        assert!(matches!(favorites.load(), Err(StorageError::Io(_))));

        storage.reads_fail.store(false, Ordering::SeqCst);
        assert!(favorites.is_favorite("pikachu"));
        assert!(favorites.is_favorite("mew"));
    }
}
