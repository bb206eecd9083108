//! Query backend abstraction for the search component
//!
//! The search session depends only on the [`PlaceQuery`] capability, not
//! on a concrete store, so a fake backend can stand in for the catalog in
//! tests and third-party data sources can be plugged in unchanged.

use crate::catalog::{Catalog, CatalogError};
use crate::{Place, PlaceKind};
use thiserror::Error;

/// Name ordering of query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Name ascending (A to Z)
    #[default]
    NameAsc,
    /// Name descending (Z to A)
    NameDesc,
}

/// Errors surfaced by a query backend
#[derive(Debug, Error)]
pub enum QueryError {
    /// The catalog store failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The backend is unreachable or refused the query
    #[error("Query backend unavailable: {0}")]
    Unavailable(String),
}

/// Capability to look up places by name
///
/// Implementations perform a case-insensitive substring match against the
/// place name, return results ordered by name at the source, and cap them
/// at `limit` when given. Callers never re-order results.
pub trait PlaceQuery {
    /// Look up places whose name contains `pattern`
    ///
    /// # Arguments
    /// * `kind` - Restrict matches to one kind, or `None` for all kinds
    /// * `pattern` - Substring to match, case-insensitively
    /// * `order` - Name ordering of the results
    /// * `limit` - Maximum number of results, or `None` for all matches
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if the backend fails. "No matches" is an empty
    /// `Ok` result, never an error.
    fn search(
        &self,
        kind: Option<PlaceKind>,
        pattern: &str,
        order: SortOrder,
        limit: Option<usize>,
    ) -> Result<Vec<Place>, QueryError>;
}

impl PlaceQuery for Catalog {
    fn search(
        &self,
        kind: Option<PlaceKind>,
        pattern: &str,
        order: SortOrder,
        limit: Option<usize>,
    ) -> Result<Vec<Place>, QueryError> {
        Ok(self.search_name(kind, pattern, order, limit)?)
    }
}

/// In-memory query backend over a fixed set of places
///
/// Useful for tests and demos without a store on disk. Applies the same
/// match, order, and cap rules as the catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticQuery {
    places: Vec<Place>,
}

impl StaticQuery {
    /// Create a backend over the given places
    #[must_use]
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }
}

impl PlaceQuery for StaticQuery {
    fn search(
        &self,
        kind: Option<PlaceKind>,
        pattern: &str,
        order: SortOrder,
        limit: Option<usize>,
    ) -> Result<Vec<Place>, QueryError> {
        let needle = pattern.to_lowercase();
        let mut hits: Vec<Place> = self
            .places
            .iter()
            .filter(|p| kind.is_none_or(|k| p.kind == k))
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        hits.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        if order == SortOrder::NameDesc {
            hits.reverse();
        }
        if let Some(cap) = limit {
            hits.truncate(cap);
        }
        Ok(hits)
    }
}

/// Query backend that always fails
///
/// Stands in for an unreachable data source in error-path tests.
#[derive(Debug, Clone)]
pub struct FailingQuery {
    reason: String,
}

impl FailingQuery {
    /// Create a backend failing with the given reason
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PlaceQuery for FailingQuery {
    fn search(
        &self,
        _kind: Option<PlaceKind>,
        _pattern: &str,
        _order: SortOrder,
        _limit: Option<usize>,
    ) -> Result<Vec<Place>, QueryError> {
        Err(QueryError::Unavailable(self.reason.clone()))
    }
}
