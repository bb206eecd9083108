//! Testing utilities for wayfindr
//!
//! This module provides helper types and functions for writing tests,
//! including a `TestCatalog` wrapper for temporary store management and a
//! shared set of sample places.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::Catalog;
use crate::{Place, PlaceKind};
use tempfile::TempDir;

/// Wrapper for a temporary catalog that cleans up on drop
///
/// The store lives in a unique temporary directory which is removed when
/// the wrapper goes out of scope, so tests don't leave artifacts behind.
pub struct TestCatalog {
    // Held for its Drop; removing the directory closes the store files
    _dir: TempDir,
    catalog: Catalog,
}

impl TestCatalog {
    /// Create an empty test catalog
    ///
    /// # Panics
    /// Panics if the temporary directory or the store cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let catalog = Catalog::open(dir.path()).expect("Failed to open test catalog");
        Self { _dir: dir, catalog }
    }

    /// Create a test catalog seeded with [`sample_places`]
    ///
    /// # Panics
    /// Panics if the store cannot be created or seeded.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::new();
        for place in sample_places() {
            store.catalog.insert(&place).expect("Failed to seed catalog");
        }
        store
    }

    /// Get a reference to the underlying catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// A small, realistic set of places used across the test suite
#[must_use]
pub fn sample_places() -> Vec<Place> {
    fn place(
        id: &str,
        name: &str,
        slug: &str,
        kind: PlaceKind,
        region: Option<&str>,
    ) -> Place {
        Place {
            id: id.to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
            kind,
            summary: None,
            region: region.map(str::to_string),
        }
    }

    vec![
        place("city-tunis", "Tunis", "tunis", PlaceKind::City, Some("Tunis Governorate")),
        place("city-carthage", "Carthage", "carthage", PlaceKind::City, Some("Tunis Governorate")),
        place("city-sousse", "Sousse", "sousse", PlaceKind::City, Some("Sousse Governorate")),
        place(
            "city-sidi-bou-said",
            "Sidi Bou Said",
            "sidi-bou-said",
            PlaceKind::City,
            Some("Tunis Governorate"),
        ),
        place(
            "attr-bardo",
            "Bardo Museum",
            "bardo-museum",
            PlaceKind::Attraction,
            Some("Tunis"),
        ),
        place(
            "attr-el-jem",
            "El Jem Amphitheatre",
            "el-jem-amphitheatre",
            PlaceKind::Attraction,
            Some("Mahdia Governorate"),
        ),
        place(
            "rest-dar-el-jeld",
            "Dar El Jeld",
            "dar-el-jeld",
            PlaceKind::Restaurant,
            Some("Tunis Medina"),
        ),
        place(
            "guide-medina",
            "Medina Walking Guide",
            "medina-walking-guide",
            PlaceKind::Guide,
            Some("Tunis"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_starts_empty() {
        let store = TestCatalog::new();
        assert_eq!(store.catalog().count(), 0);
    }

    #[test]
    fn test_seeded_catalog_contains_samples() {
        let store = TestCatalog::seeded();
        assert_eq!(store.catalog().count(), sample_places().len());
        assert!(store.catalog().get("city-tunis").unwrap().is_some());
    }

    #[test]
    fn test_sample_places_have_unique_ids_and_slugs() {
        let places = sample_places();
        let mut ids: Vec<&str> = places.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), places.len());

        let mut slugs: Vec<&str> = places.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), places.len());
    }

    #[test]
    fn test_sample_places_cover_every_kind() {
        let places = sample_places();
        for kind in PlaceKind::ALL {
            assert!(places.iter().any(|p| p.kind == kind), "missing {kind}");
        }
    }
}
