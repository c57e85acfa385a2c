// SPDX-License-Identifier: GPL-3.0-only

use anywho::{Error, anywho};
use starrylist::{
    app::{Applied, ListController, NotificationKind},
    config::Config,
    core::{api::PokeApi, favorites::FavoritesStore, storage::FileStore},
    entities::PokemonView,
    fl,
    utils::{capitalize_string, scale_numbers, stat_color},
};
use tracing_subscriber::EnvFilter;

type Controller = ListController<PokeApi, FileStore>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    starrylist::i18n::init(&requested_languages);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_help();
        return Ok(());
    };

    let config = Config::load()?;
    let storage = FileStore::new(config.storage_dir()?)?;
    let mut controller = ListController::new(
        PokeApi::new()?,
        FavoritesStore::new(storage),
        config.items_per_page,
    );

    match (command.as_str(), args.get(1)) {
        ("list", pages) => {
            let pages = match pages {
                Some(pages) => pages
                    .parse::<usize>()
                    .map_err(|_| anywho!("Invalid page count: {pages}"))?,
                None => 1,
            };
            list(&mut controller, pages).await
        }
        ("search", Some(name)) => search(&mut controller, name).await,
        ("favorite", Some(name)) => toggle(&mut controller, name),
        ("favorites", None) => {
            print_favorites(&controller);
            Ok(())
        }
        _ => {
            println!("Invalid command: {}", args.join(" "));
            print_help();
            Ok(())
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!(
        "Usage: {} [COMMAND]",
        std::env::args()
            .next()
            .unwrap_or_else(|| "starrylist".to_string())
    );
    println!();
    println!("COMMANDS:");
    println!("  list [PAGES]       Show the first PAGES pages of Pokémon (default 1)");
    println!("  search <NAME>      Show the details of a Pokémon");
    println!("  favorite <NAME>    Add or remove a Pokémon from the favorites");
    println!("  favorites          Show the favorite Pokémon");
}

async fn list(controller: &mut Controller, pages: usize) -> Result<(), Error> {
    controller.load_page().await;

    for _ in 1..pages {
        if controller.error().is_some() || controller.load_more().await == Applied::Skipped {
            break;
        }
    }

    if let Some(error) = controller.error() {
        return Err(anywho!("{error}"));
    }

    for pokemon in controller.filtered_items() {
        let marker = if pokemon.is_favorite { "★" } else { " " };
        println!("{marker} {}", capitalize_string(&pokemon.name));
    }

    if let Some(total) = controller.total_count() {
        println!();
        println!("{} / {total}", controller.items().len());
    }

    Ok(())
}

async fn search(controller: &mut Controller, name: &str) -> Result<(), Error> {
    controller.search(name).await;

    if let Some(error) = controller.error() {
        return Err(anywho!("{error}"));
    }

    if let Some(pokemon) = controller.detail() {
        print_details(pokemon);
    }

    Ok(())
}

fn print_details(pokemon: PokemonView<'_>) {
    let details = pokemon.details;
    let marker = if pokemon.is_favorite { " ★" } else { "" };

    println!("#{} {}{marker}", details.id, capitalize_string(&details.name));
    println!("Types: {}", details.types.join(", ").to_uppercase());
    println!(
        "Weight: {} Kg  Height: {} m",
        scale_numbers(details.weight),
        scale_numbers(details.height)
    );
    println!(
        "Abilities: {}",
        details
            .abilities
            .iter()
            .map(|a| {
                if a.is_hidden {
                    format!("{} (HIDDEN)", capitalize_string(&a.name))
                } else {
                    capitalize_string(&a.name)
                }
            })
            .collect::<Vec<String>>()
            .join(", ")
    );

    for stat in &details.stats {
        println!(
            "  {:<16} {:>3} [{}]",
            capitalize_string(&stat.name),
            stat.base_stat,
            stat_color(&stat.name)
        );
    }
    println!("  {:<16} {:>3}", "Total", details.total_stats());
    println!("Moves: {}", details.moves.len());
}

fn toggle(controller: &mut Controller, name: &str) -> Result<(), Error> {
    let name = name.trim().to_lowercase();
    let notification = controller
        .toggle_favorite(&name)
        .map_err(|err| anywho!("{}: {err}", fl!("favorite-save-error")))?;

    match notification.kind {
        NotificationKind::Success => println!("+ {}", notification.message),
        NotificationKind::Danger => println!("- {}", notification.message),
    }

    Ok(())
}

fn print_favorites(controller: &Controller) {
    let favorites = controller.favorites();

    if favorites.is_empty() {
        println!("{}", fl!("no-favorites"));
        return;
    }

    for favorite in favorites {
        println!("★ {}", capitalize_string(&favorite.name));
    }
}
