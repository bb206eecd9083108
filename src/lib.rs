//! Wayfindr - search a tourism place catalog and navigate to the result
//!
//! This library provides an interactive search component over a catalog of
//! places (cities, attractions, restaurants, guides): debounced lookups
//! against an injected query backend, and navigation to the matching
//! content page on selection.

use bincode::{self, Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod nav;
pub mod output;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum WayfindrError {
    /// Catalog store error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Search/query error
    #[error("Search error: {0}")]
    QueryError(#[from] search::QueryError),
    /// UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A single entry in the place catalog
///
/// The normalized record shape shared by the catalog store, the search
/// component, and the UI. `slug` is the URL-safe route segment; when a
/// record has no slug the id stands in for it.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub kind: PlaceKind,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

impl Place {
    /// Create a new Place with no summary or region
    #[must_use]
    pub const fn new(id: String, name: String, slug: String, kind: PlaceKind) -> Self {
        Self {
            id,
            name,
            slug,
            kind,
            summary: None,
            region: None,
        }
    }

    /// The route segment used when linking to this place
    ///
    /// Falls back to the id for records without a slug.
    #[must_use]
    pub fn route_key(&self) -> &str {
        if self.slug.is_empty() {
            &self.id
        } else {
            &self.slug
        }
    }
}

/// Category of a catalog entry, also the collection segment of its route
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    City,
    Attraction,
    Restaurant,
    Guide,
}

impl PlaceKind {
    /// All kinds, in display order
    pub const ALL: [Self; 4] = [Self::City, Self::Attraction, Self::Restaurant, Self::Guide];

    /// Route collection segment (`/cities/<slug>` etc.)
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::City => "cities",
            Self::Attraction => "attractions",
            Self::Restaurant => "restaurants",
            Self::Guide => "guides",
        }
    }

    /// Singular label for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Attraction => "attraction",
            Self::Restaurant => "restaurant",
            Self::Guide => "guide",
        }
    }
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for PlaceKind {
    type Err = WayfindrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "city" | "cities" => Ok(Self::City),
            "attraction" | "attractions" => Ok(Self::Attraction),
            "restaurant" | "restaurants" => Ok(Self::Restaurant),
            "guide" | "guides" => Ok(Self::Guide),
            other => Err(WayfindrError::InvalidInput(format!(
                "Unknown place kind: '{other}'. Expected city, attraction, restaurant or guide"
            ))),
        }
    }
}
