//! Wayfindr CLI application entry point
//!
//! This is the main executable for wayfindr. It provides a command-line
//! interface for searching a tourism place catalog and opening the
//! matching content pages.
//!
//! # Usage
//!
//! ```bash
//! # Interactive search (default command)
//! wayfindr
//! wayfindr browse tun
//!
//! # One-shot lookup
//! wayfindr search tunis
//! wayfindr search carthage --kind city --limit 3
//!
//! # Seed the catalog from a JSON records file
//! wayfindr import places.json
//! wayfindr import cities.json --kind city
//!
//! # Inventory
//! wayfindr list
//! wayfindr list kinds
//! wayfindr show tunis
//!
//! # Quiet mode (only output routes)
//! wayfindr -q search tunis
//! ```
//!
//! # Configuration
//!
//! On first run, wayfindr will prompt for initial setup. Configuration is
//! stored in the user's config directory
//! (`~/.config/wayfindr/config.toml` on Linux).

use std::path::PathBuf;
use std::sync::Arc;
use wayfindr::{
    PlaceKind, WayfindrError,
    catalog::{Catalog, import_json},
    cli::{CatalogCommands, Cli, Commands, ConfigCommands, ListVariant},
    config::WayfindrConfig,
    nav::{LinkNavigator, Navigator, dispatch},
    output,
    search::{RouteTarget, SearchSpec, SortOrder},
    ui::SearchApp,
};

type Result<T> = std::result::Result<T, WayfindrError>;

/// Navigator that prints routes instead of opening them
///
/// Used by `browse --print` and quiet scripting flows.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn go_to(&self, path: &str) {
        println!("{path}");
    }
}

/// Handle the browse command - interactive search with navigation
///
/// Runs the search TUI over the catalog; the chosen route is dispatched to
/// the configured site, or printed when `--print` is given. Leaving the
/// finder without a choice is not an error.
///
/// # Errors
///
/// Returns `WayfindrError` if the UI fails.
fn handle_browse_command(
    catalog: Catalog,
    config: &WayfindrConfig,
    query: Option<String>,
    kind: Option<PlaceKind>,
    print: bool,
    quiet: bool,
) -> Result<()> {
    let spec = match kind {
        Some(PlaceKind::City) => SearchSpec::cities(),
        Some(other) => SearchSpec::general()
            .with_kind(Some(other))
            .with_limit(Some(config.result_limit)),
        None => SearchSpec::general().with_limit(Some(config.result_limit)),
    }
    .with_debounce(config.debounce());

    let app = SearchApp::new(Arc::new(catalog));
    match app.run(spec, query)? {
        Some(route) => {
            let dispatched = if print {
                dispatch(&PrintNavigator, &route)
            } else {
                let navigator = LinkNavigator::new(config.site_url.clone(), quiet);
                dispatch(&navigator, &route)
            };
            if !dispatched && !quiet {
                eprintln!("{}", output::message(output::MessageLevel::Warning, "Nothing to open"));
            }
        }
        None => {
            if !quiet {
                println!("Browse cancelled.");
            }
        }
    }
    Ok(())
}

/// Handle the search command - one-shot place lookup
///
/// Trims the query, looks it up once, and prints the normalized matches.
/// With `--open` the search results page is opened instead.
///
/// # Errors
///
/// Returns `WayfindrError` if the query is empty or the lookup fails.
#[allow(clippy::too_many_arguments)]
fn handle_search_command(
    catalog: &Catalog,
    config: &WayfindrConfig,
    query: &str,
    kind: Option<PlaceKind>,
    limit: Option<usize>,
    desc: bool,
    open: bool,
    quiet: bool,
) -> Result<()> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(WayfindrError::InvalidInput(
            "Empty search query. Give at least one character to match against place names.".into(),
        ));
    }

    if open {
        let navigator = LinkNavigator::new(config.site_url.clone(), quiet);
        dispatch(&navigator, &RouteTarget::search(trimmed));
        return Ok(());
    }

    let order = if desc {
        SortOrder::NameDesc
    } else {
        SortOrder::NameAsc
    };
    // --limit 0 means unlimited
    let cap = match limit {
        Some(0) => None,
        Some(n) => Some(n),
        None => Some(config.result_limit),
    };

    let places = catalog.search_name(kind, trimmed, order, cap)?;

    if places.is_empty() {
        if !quiet {
            println!("No places found matching '{trimmed}'");
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} place(s) matching '{}':", places.len(), trimmed);
    }
    for place in &places {
        println!("{}", output::place_line(place, quiet));
    }
    Ok(())
}

/// Handle the import command - seed the catalog from a JSON file
///
/// # Errors
///
/// Returns `WayfindrError` if the seed file cannot be read or parsed, or
/// if the store fails.
fn handle_import_command(
    catalog: &Catalog,
    file: &PathBuf,
    kind: Option<PlaceKind>,
    quiet: bool,
) -> Result<()> {
    let report = import_json(catalog, file, kind)?;

    if !quiet {
        println!(
            "Imported {} place(s) from {}",
            report.imported,
            file.display()
        );
        if !report.skipped.is_empty() {
            println!("Skipped {} record(s):", report.skipped.len());
            for reason in &report.skipped {
                println!("  - {reason}");
            }
        }
    }
    Ok(())
}

/// Handle the list command - list places or kind counts
///
/// # Errors
///
/// Returns `WayfindrError` if catalog operations fail.
fn handle_list_command(
    catalog: &Catalog,
    variant: ListVariant,
    kind: Option<PlaceKind>,
    quiet: bool,
) -> Result<()> {
    match variant {
        ListVariant::Places => {
            let places = match kind {
                Some(k) => catalog.list_kind(k)?,
                None => catalog.list_all()?,
            };

            if places.is_empty() {
                if !quiet {
                    println!("No places found in catalog.");
                }
            } else {
                if !quiet {
                    println!("Places in catalog:");
                }
                for place in &places {
                    println!("{}", output::place_line(place, quiet));
                }
            }
        }
        ListVariant::Kinds => {
            let counts = catalog.kind_counts()?;
            if !quiet {
                println!("Kinds in catalog:");
            }
            for (kind, count) in counts {
                println!("{}", output::kind_with_count(kind, count, quiet));
            }
        }
    }
    Ok(())
}

/// Handle the show command - print one place by slug
///
/// # Errors
///
/// Returns `WayfindrError` if the slug matches nothing or the catalog fails.
fn handle_show_command(catalog: &Catalog, slug: &str, quiet: bool) -> Result<()> {
    let place = catalog
        .get_by_slug(slug)?
        .ok_or_else(|| WayfindrError::InvalidInput(format!("No place with slug '{slug}'")))?;

    println!("{}", output::place_line(&place, quiet));
    if !quiet && let Some(summary) = &place.summary {
        println!("  {summary}");
    }
    Ok(())
}

/// Handle the catalog command - manage the catalog registry
///
/// # Errors
///
/// Returns `WayfindrError` if the operation is invalid (e.g., duplicate
/// name, non-existent catalog), configuration save fails, or filesystem
/// operations fail.
fn handle_catalog_command(
    mut config: WayfindrConfig,
    command: &CatalogCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        CatalogCommands::Add { name, path } => {
            if config.get_catalog(name).is_some() {
                return Err(WayfindrError::InvalidInput(format!(
                    "Catalog '{name}' already exists"
                )));
            }

            let resolved_path = if path.components().count() == 1 {
                let data_dir = dirs::data_local_dir().ok_or_else(|| {
                    WayfindrError::InvalidInput("Could not determine data directory".into())
                })?;
                data_dir.join("wayfindr").join(path)
            } else {
                path.clone()
            };

            config.add_catalog(name.clone(), resolved_path.clone())?;

            if !resolved_path.exists() {
                std::fs::create_dir_all(&resolved_path)?;
            }

            if !quiet {
                println!("Catalog '{name}' added at {}", resolved_path.display());
            }

            if config.catalogs.len() == 1 {
                config.set_default_catalog(name.clone())?;
                if !quiet {
                    println!("Set '{name}' as default catalog");
                }
            }
        }
        CatalogCommands::List => {
            if config.catalogs.is_empty() {
                if !quiet {
                    println!("No catalogs configured.");
                    println!("Add one with: wayfindr catalog add <name> <path>");
                }
                return Ok(());
            }

            if !quiet {
                println!("Configured catalogs:");
            }

            let default_catalog = config.get_default_catalog();
            let mut names: Vec<_> = config.list_catalogs();
            names.sort();

            for name in names {
                if let Some(path) = config.get_catalog(name) {
                    let marker = if default_catalog == Some(name) {
                        " (default)"
                    } else {
                        ""
                    };

                    if quiet {
                        println!("{name}");
                    } else {
                        println!("  {} -> {}{}", name, path.display(), marker);
                    }
                }
            }
        }
        CatalogCommands::Remove { name, delete_files } => {
            if config.get_catalog(name).is_none() {
                return Err(WayfindrError::InvalidInput(format!(
                    "Catalog '{name}' does not exist"
                )));
            }

            let is_default = config.get_default_catalog() == Some(name);
            if is_default && !quiet {
                println!("Warning: Removing the default catalog. You'll need to set a new default.");
            }

            let removed_path = config.remove_catalog(name)?;

            if let Some(path) = removed_path {
                if !quiet {
                    println!("Catalog '{name}' removed from configuration");
                }

                if *delete_files {
                    if path.exists() {
                        match std::fs::remove_dir_all(&path) {
                            Ok(()) => {
                                if !quiet {
                                    println!("Catalog files deleted from {}", path.display());
                                }
                            }
                            Err(e) => {
                                if !quiet {
                                    eprintln!("Warning: Failed to delete catalog files: {e}");
                                }
                            }
                        }
                    } else if !quiet {
                        println!(
                            "Catalog files at {} do not exist (already deleted)",
                            path.display()
                        );
                    }
                } else if !quiet {
                    println!("Note: Catalog files at {} were NOT deleted", path.display());
                }
            }

            if is_default {
                config.default_catalog = None;
                config.save()?;
            }
        }
        CatalogCommands::SetDefault { name } => {
            if config.get_catalog(name).is_none() {
                return Err(WayfindrError::InvalidInput(format!(
                    "Catalog '{name}' does not exist"
                )));
            }

            config.set_default_catalog(name.clone())?;

            if !quiet {
                println!("Set '{name}' as default catalog");
            }
        }
    }
    Ok(())
}

/// Handle the config command - manage application settings
///
/// # Errors
///
/// Returns `WayfindrError` if the configuration key is invalid, value
/// parsing fails, or configuration save fails.
fn handle_config_command(
    mut config: WayfindrConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let parts: Vec<&str> = setting.splitn(2, '=').collect();
            if parts.len() != 2 {
                return Err(WayfindrError::InvalidInput(
                    "Invalid format. Use: wayfindr config set key=value".into(),
                ));
            }

            let key = parts[0].trim();
            let value = parts[1].trim();

            match key {
                "quiet" => {
                    config.quiet = value.parse::<bool>().map_err(|_| {
                        WayfindrError::InvalidInput(format!(
                            "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                        ))
                    })?;
                }
                "debounce_ms" => {
                    config.debounce_ms = value.parse::<u64>().map_err(|_| {
                        WayfindrError::InvalidInput(format!(
                            "Invalid value for debounce_ms: '{value}'. Use a number of milliseconds"
                        ))
                    })?;
                }
                "result_limit" => {
                    config.result_limit = value.parse::<usize>().map_err(|_| {
                        WayfindrError::InvalidInput(format!(
                            "Invalid value for result_limit: '{value}'. Use a number"
                        ))
                    })?;
                }
                "site_url" => {
                    config.site_url = (!value.is_empty()).then(|| value.to_string());
                }
                _ => {
                    return Err(WayfindrError::InvalidInput(format!(
                        "Unknown configuration key: '{key}'. Available keys: quiet, debounce_ms, result_limit, site_url"
                    )));
                }
            }
            config.save()?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
        ConfigCommands::Get { key } => match key.as_str() {
            "quiet" => println!("{}", config.quiet),
            "debounce_ms" => println!("{}", config.debounce_ms),
            "result_limit" => println!("{}", config.result_limit),
            "site_url" => println!("{}", config.site_url.as_deref().unwrap_or("")),
            _ => {
                return Err(WayfindrError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: quiet, debounce_ms, result_limit, site_url"
                )));
            }
        },
    }
    Ok(())
}

/// Main entry point for the wayfindr application
///
/// Loads configuration, parses command-line arguments, and dispatches to
/// the appropriate command handler.
///
/// # Errors
///
/// Returns `WayfindrError` if configuration loading fails, catalog
/// initialization fails, or any command handler returns an error.
fn main() -> Result<()> {
    let config = WayfindrConfig::load_or_setup()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    if let Commands::Catalog { command } = &command {
        handle_catalog_command(config, command, quiet)?;
    } else if let Commands::Config { command } = &command {
        handle_config_command(config, command, quiet)?;
    } else {
        let catalog_name = cli
            .catalog
            .clone()
            .or_else(|| config.get_default_catalog().cloned())
            .ok_or_else(|| {
                WayfindrError::InvalidInput(
                    "No default catalog set. Use 'wayfindr catalog add <name> <path>' to create one, or specify --catalog <name>.".into(),
                )
            })?;

        let catalog_path = config.get_catalog(&catalog_name).ok_or_else(|| {
            WayfindrError::InvalidInput(format!(
                "Catalog '{catalog_name}' not found in configuration"
            ))
        })?;

        let catalog = Catalog::open(catalog_path)?;

        match command {
            Commands::Browse { query, kind, print } => {
                handle_browse_command(
                    catalog,
                    &config,
                    query,
                    kind.map(Into::into),
                    print,
                    quiet,
                )?;
            }
            Commands::Search {
                query,
                kind,
                limit,
                desc,
                open,
            } => {
                handle_search_command(
                    &catalog,
                    &config,
                    &query,
                    kind.map(Into::into),
                    limit,
                    desc,
                    open,
                    quiet,
                )?;
            }
            Commands::Import { file, kind } => {
                handle_import_command(&catalog, &file, kind.map(Into::into), quiet)?;
            }
            Commands::List { variant, kind } => {
                handle_list_command(&catalog, variant, kind.map(Into::into), quiet)?;
            }
            Commands::Show { slug } => {
                handle_show_command(&catalog, &slug, quiet)?;
            }
            Commands::Catalog { .. } | Commands::Config { .. } => unreachable!(),
        }
    }

    Ok(())
}
