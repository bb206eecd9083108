//! Navigation targets derived from search state
//!
//! A selected place resolves to `/<collection>/<slug-or-id>`; an explicit
//! submit resolves to `/search?q=<trimmed query>`. The navigation layer
//! only ever receives targets built here, and re-checks well-formedness
//! before acting.

use crate::Place;
use std::fmt;

/// A site-relative path to navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget(String);

impl RouteTarget {
    /// Route to a place's content page
    #[must_use]
    pub fn place(place: &Place) -> Self {
        Self(format!(
            "/{}/{}",
            place.kind.collection(),
            place.route_key()
        ))
    }

    /// Route to the search results page for a query
    ///
    /// The query is trimmed and inserted verbatim.
    #[must_use]
    pub fn search(query: &str) -> Self {
        Self(format!("/search?q={}", query.trim()))
    }

    /// Wrap a raw path without validation
    ///
    /// Malformed paths are tolerated here; [`is_well_formed`] is the gate
    /// the dispatcher applies.
    ///
    /// [`is_well_formed`]: Self::is_well_formed
    #[must_use]
    pub fn raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path string
    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }

    /// Whether this target is something a navigator may act on
    ///
    /// A well-formed target is non-empty, site-relative (leading slash)
    /// and names at least one path segment.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let Some(rest) = self.0.strip_prefix('/') else {
            return false;
        };
        !rest.is_empty()
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RouteTarget> for String {
    fn from(target: RouteTarget) -> Self {
        target.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlaceKind;

    #[test]
    fn test_place_route_uses_collection_and_slug() {
        let place = Place::new(
            "1".to_string(),
            "Tunis".to_string(),
            "tunis".to_string(),
            PlaceKind::City,
        );
        assert_eq!(RouteTarget::place(&place).path(), "/cities/tunis");
    }

    #[test]
    fn test_place_route_falls_back_to_id() {
        let place = Place::new(
            "77".to_string(),
            "Roman Baths".to_string(),
            String::new(),
            PlaceKind::Attraction,
        );
        assert_eq!(RouteTarget::place(&place).path(), "/attractions/77");
    }

    #[test]
    fn test_search_route_trims_query() {
        assert_eq!(
            RouteTarget::search("   Carthage   ").path(),
            "/search?q=Carthage"
        );
        assert_eq!(RouteTarget::search("El Jem").path(), "/search?q=El Jem");
    }

    #[test]
    fn test_well_formedness() {
        assert!(RouteTarget::raw("/cities/tunis").is_well_formed());
        assert!(RouteTarget::raw("/search?q=El Jem").is_well_formed());
        assert!(!RouteTarget::raw("").is_well_formed());
        assert!(!RouteTarget::raw("/").is_well_formed());
        assert!(!RouteTarget::raw("cities/tunis").is_well_formed());
    }
}
