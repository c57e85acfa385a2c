// SPDX-License-Identifier: GPL-3.0-only

//! List, search and favorite Pokémon from PokéApi.
//!
//! [`app::ListController`] is what a UI binds to. It talks to the catalog
//! through [`core::api::CatalogApi`] and keeps favorites in a
//! [`core::storage::KeyValueStore`].

pub mod app;
pub mod config;
pub mod core;
pub mod entities;
pub mod error;
pub mod i18n;
pub mod utils;

pub const APP_ID: &str = "dev.mariinkys.StarryList";
