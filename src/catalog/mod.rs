//! Catalog store module for wayfindr
//!
//! Provides a clean API for storing and querying place records using sled
//! as the embedded database backend.
//!
//! Uses multiple sled trees for efficient lookups:
//! - `places`: Main tree mapping place ids to records
//! - `names`: Name index mapping lowercased names to ids, so alphabetical
//!   scans and substring lookups never decode records they discard

use crate::{Place, PlaceKind};
use crate::search::SortOrder;
use bincode;
use sled::{Db, Tree};
use std::path::Path;

pub mod error;
pub mod import;
pub mod types;

pub use error::CatalogError;
pub use import::{ImportReport, import_json};
pub use types::NameKey;

/// Catalog wrapper that encapsulates all store operations
///
/// Uses two trees:
/// - `places` tree: id -> bincode-encoded [`Place`]
/// - `names` tree: `lowercase(name)\0id` -> id
pub struct Catalog {
    db: Db,
    places: Tree, // id -> record
    names: Tree,  // name index
}

impl Catalog {
    /// Opens or creates a catalog at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use wayfindr::catalog::Catalog;
    /// let catalog = Catalog::open("my_catalog").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the store cannot be opened or if the
    /// internal trees cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let db = sled::open(path)?;
        let places = db.open_tree("places")?;
        let names = db.open_tree("names")?;
        Ok(Self { db, places, names })
    }

    /// Insert or update a place record
    ///
    /// Upsert semantics: an existing record with the same id is replaced
    /// and its old name-index entry removed.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the record has an empty id or name, or if
    /// store operations or serialization fail.
    pub fn insert(&self, place: &Place) -> Result<(), CatalogError> {
        if place.id.trim().is_empty() {
            return Err(CatalogError::InvalidRecord("empty id".to_string()));
        }
        if place.name.trim().is_empty() {
            return Err(CatalogError::InvalidRecord(format!(
                "empty name for id '{}'",
                place.id
            )));
        }

        if let Some(old) = self.get(&place.id)? {
            self.names
                .remove(NameKey::new(&old.name, &old.id).as_bytes())?;
        }

        let value = bincode::encode_to_vec(place, bincode::config::standard())?;
        self.places.insert(place.id.as_bytes(), value)?;
        self.names.insert(
            NameKey::new(&place.name, &place.id).as_bytes(),
            place.id.as_bytes(),
        )?;

        Ok(())
    }

    /// Get a place by id
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if store operations or deserialization fail.
    pub fn get(&self, id: &str) -> Result<Option<Place>, CatalogError> {
        match self.places.get(id.as_bytes())? {
            Some(value) => {
                let (place, _): (Place, usize) =
                    bincode::decode_from_slice(&value, bincode::config::standard())?;
                Ok(Some(place))
            }
            None => Ok(None),
        }
    }

    /// Get a place by its route slug
    ///
    /// Falls back to an id lookup, matching the route convention where the
    /// id stands in for a missing slug.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if store operations or deserialization fail.
    pub fn get_by_slug(&self, slug: &str) -> Result<Option<Place>, CatalogError> {
        for entry in self.places.iter() {
            let (_, value) = entry?;
            let (place, _): (Place, usize) =
                bincode::decode_from_slice(&value, bincode::config::standard())?;
            if place.slug == slug {
                return Ok(Some(place));
            }
        }
        self.get(slug)
    }

    /// Remove a place by id
    ///
    /// Returns whether a record was actually removed.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if store operations fail.
    pub fn remove(&self, id: &str) -> Result<bool, CatalogError> {
        if let Some(old) = self.get(id)? {
            self.names
                .remove(NameKey::new(&old.name, &old.id).as_bytes())?;
        }
        Ok(self.places.remove(id.as_bytes())?.is_some())
    }

    /// Number of places in the catalog
    #[must_use]
    pub fn count(&self) -> usize {
        self.places.len()
    }

    /// Remove every record from the catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if store operations fail.
    pub fn clear(&self) -> Result<(), CatalogError> {
        self.places.clear()?;
        self.names.clear()?;
        self.db.flush()?;
        Ok(())
    }

    /// List all places, ordered by name ascending
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if store operations or deserialization fail.
    pub fn list_all(&self) -> Result<Vec<Place>, CatalogError> {
        self.search_name(None, "", SortOrder::NameAsc, None)
    }

    /// List places of one kind, ordered by name ascending
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if store operations or deserialization fail.
    pub fn list_kind(&self, kind: PlaceKind) -> Result<Vec<Place>, CatalogError> {
        self.search_name(Some(kind), "", SortOrder::NameAsc, None)
    }

    /// Count places per kind, in [`PlaceKind::ALL`] order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if store operations or deserialization fail.
    pub fn kind_counts(&self) -> Result<Vec<(PlaceKind, usize)>, CatalogError> {
        let mut counts = [0usize; PlaceKind::ALL.len()];
        for entry in self.places.iter() {
            let (_, value) = entry?;
            let (place, _): (Place, usize) =
                bincode::decode_from_slice(&value, bincode::config::standard())?;
            for (slot, kind) in counts.iter_mut().zip(PlaceKind::ALL) {
                if place.kind == kind {
                    *slot += 1;
                }
            }
        }
        Ok(PlaceKind::ALL.into_iter().zip(counts).collect())
    }

    /// Case-insensitive substring lookup on place names
    ///
    /// Results come back in index order (name ascending, or descending for
    /// [`SortOrder::NameDesc`]), capped at `limit` when given. An empty
    /// pattern matches everything, which is how the list operations share
    /// this scan.
    ///
    /// # Arguments
    /// * `kind` - Restrict matches to one kind, or `None` for all kinds
    /// * `pattern` - Substring to look for, matched case-insensitively
    /// * `order` - Name ordering of the returned records
    /// * `limit` - Maximum number of records, or `None` for all matches
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if store operations or deserialization fail.
    pub fn search_name(
        &self,
        kind: Option<PlaceKind>,
        pattern: &str,
        order: SortOrder,
        limit: Option<usize>,
    ) -> Result<Vec<Place>, CatalogError> {
        let needle = pattern.to_lowercase();
        let cap = limit.unwrap_or(usize::MAX);
        let mut matches = Vec::new();

        let entries: Box<dyn Iterator<Item = sled::Result<(sled::IVec, sled::IVec)>>> = match order
        {
            SortOrder::NameAsc => Box::new(self.names.iter()),
            SortOrder::NameDesc => Box::new(self.names.iter().rev()),
        };

        for entry in entries {
            if matches.len() >= cap {
                break;
            }

            let (key, id) = entry?;
            if !needle.is_empty() && !NameKey::name_part(&key)?.contains(&needle) {
                continue;
            }

            let id = std::str::from_utf8(&id)
                .map_err(|e| CatalogError::InvalidRecord(format!("id not UTF-8: {e}")))?;
            let Some(place) = self.get(id)? else {
                // Dangling index entry; skip rather than fail the scan
                continue;
            };

            if kind.is_none_or(|k| place.kind == k) {
                matches.push(place);
            }
        }

        Ok(matches)
    }
}
