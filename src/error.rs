// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

/// Failures talking to the remote catalog
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested Pokémon does not exist in the catalog
    #[error("Pokémon '{0}' was not found")]
    NotFound(String),
    /// Any network, status or decoding failure
    #[error("failed to fetch from PokéApi: {0}")]
    FetchFailed(String),
}

impl From<rustemon::error::Error> for CatalogError {
    fn from(err: rustemon::error::Error) -> Self {
        CatalogError::FetchFailed(err.to_string())
    }
}

/// Failures reading or writing the key-value store
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode stored value: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
    #[error("could not determine the user data directory")]
    NoDataDir,
}

/// Failures loading or saving the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config i/o error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("items_per_page must be greater than zero")]
    InvalidPageSize,
    #[error("could not determine the user config directory")]
    NoConfigDir,
}
