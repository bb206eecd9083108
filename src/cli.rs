//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for wayfindr using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive search with navigation on selection (default)
//! - **search**: One-shot place lookup
//! - **import**: Seed the catalog from a JSON records file
//! - **list**: List catalog contents
//! - **show**: Print one place by slug
//! - **catalog**: Manage multiple catalogs (add, remove, list, set-default)
//! - **config**: Get and set configuration values
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--catalog` to address a non-default catalog
//! - Command aliases (e.g., `b` for `browse`, `s` for `search`)

use clap::{Parser, Subcommand, ValueEnum};
use crate::PlaceKind;
use std::path::PathBuf;

/// Place kind as a CLI argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    City,
    Attraction,
    Restaurant,
    Guide,
}

impl From<KindArg> for PlaceKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::City => Self::City,
            KindArg::Attraction => Self::Attraction,
            KindArg::Restaurant => Self::Restaurant,
            KindArg::Guide => Self::Guide,
        }
    }
}

/// List variant for the list command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListVariant {
    /// List all places in the catalog
    #[default]
    Places,
    /// List kinds with their record counts
    Kinds,
}

/// Catalog registry management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum CatalogCommands {
    /// Register a catalog under a name
    Add {
        /// Name for the catalog
        name: String,
        /// Path to the catalog directory (bare names land in the data dir)
        path: PathBuf,
    },

    /// Remove a catalog from the configuration
    Remove {
        /// Name of the catalog to remove
        name: String,
        /// Also delete the catalog files on disk
        #[arg(long)]
        delete_files: bool,
    },

    /// List configured catalogs
    List,

    /// Set the default catalog
    SetDefault {
        /// Name of the catalog to make default
        name: String,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., debounce_ms=200)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., site_url)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// All wayfindr subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive search; selecting a result opens its page
    #[command(visible_alias = "b")]
    Browse {
        /// Initial query text
        query: Option<String>,

        /// Restrict matches to one kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,

        /// Print the chosen route instead of opening it
        #[arg(long)]
        print: bool,
    },

    /// One-shot place lookup
    #[command(visible_alias = "s")]
    Search {
        /// Text to match against place names (case-insensitive substring)
        query: String,

        /// Restrict matches to one kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,

        /// Maximum number of matches (0 = unlimited)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Sort names Z to A instead of A to Z
        #[arg(long)]
        desc: bool,

        /// Open the search results page instead of listing matches
        #[arg(long)]
        open: bool,
    },

    /// Seed the catalog from a JSON records file
    #[command(visible_alias = "i")]
    Import {
        /// Seed file path
        file: PathBuf,

        /// Kind for records that do not declare one
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },

    /// List catalog contents
    #[command(visible_alias = "l")]
    List {
        /// What to list
        #[arg(value_enum, default_value = "places")]
        variant: ListVariant,

        /// Restrict the listing to one kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Print one place by its route slug
    Show {
        /// Slug (or id) of the place
        slug: String,
    },

    /// Manage multiple catalogs
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },

    /// Get and set configuration values
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// wayfindr - search a tourism place catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "wayfindr", version, about, long_about = None)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use a specific catalog instead of the default
    #[arg(long, global = true, value_name = "NAME")]
    pub catalog: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The selected command, defaulting to interactive browse
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: None,
            kind: None,
            print: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_browse() {
        let cli = Cli::try_parse_from(["wayfindr"]).unwrap();
        assert!(matches!(
            cli.get_command(),
            Commands::Browse {
                query: None,
                kind: None,
                print: false
            }
        ));
    }

    #[test]
    fn test_search_command_parses_flags() {
        let cli =
            Cli::try_parse_from(["wayfindr", "search", "tunis", "--kind", "city", "--limit", "3"])
                .unwrap();

        match cli.get_command() {
            Commands::Search {
                query,
                kind,
                limit,
                desc,
                open,
            } => {
                assert_eq!(query, "tunis");
                assert_eq!(kind, Some(KindArg::City));
                assert_eq!(limit, Some(3));
                assert!(!desc);
                assert!(!open);
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::try_parse_from(["wayfindr", "s", "carthage"]).unwrap();
        assert!(matches!(cli.get_command(), Commands::Search { .. }));

        let cli = Cli::try_parse_from(["wayfindr", "b"]).unwrap();
        assert!(matches!(cli.get_command(), Commands::Browse { .. }));
    }

    #[test]
    fn test_global_flags() {
        let cli =
            Cli::try_parse_from(["wayfindr", "--quiet", "--catalog", "tunisia", "list", "kinds"])
                .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.catalog.as_deref(), Some("tunisia"));
        assert!(matches!(
            cli.get_command(),
            Commands::List {
                variant: ListVariant::Kinds,
                ..
            }
        ));
    }

    #[test]
    fn test_kind_arg_conversion() {
        assert_eq!(PlaceKind::from(KindArg::City), PlaceKind::City);
        assert_eq!(PlaceKind::from(KindArg::Guide), PlaceKind::Guide);
    }
}
