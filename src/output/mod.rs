//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including place and kind listing lines and leveled status messages.

use crate::{Place, PlaceKind};
use colored::Colorize;

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageLevel {
    /// Colored prefix for the level
    #[must_use]
    pub fn prefix(self) -> String {
        match self {
            Self::Info => "info".blue().to_string(),
            Self::Success => "ok".green().to_string(),
            Self::Warning => "warn".yellow().to_string(),
            Self::Error => "error".red().to_string(),
        }
    }
}

/// Format a leveled status message
#[must_use]
pub fn message(level: MessageLevel, text: &str) -> String {
    format!("{}: {text}", level.prefix())
}

/// Format a place for listing
///
/// Quiet mode prints only the route, one per line, for scripting.
#[must_use]
pub fn place_line(place: &Place, quiet: bool) -> String {
    let route = format!("/{}/{}", place.kind.collection(), place.route_key());
    if quiet {
        return route;
    }

    let mut line = format!("  {} {} [{}]", place.name.bold(), route.dimmed(), place.kind);
    if let Some(region) = &place.region {
        line.push_str(&format!(" ({region})"));
    }
    line
}

/// Format a kind with its record count
#[must_use]
pub fn kind_with_count(kind: PlaceKind, count: usize, quiet: bool) -> String {
    if quiet {
        kind.collection().to_string()
    } else {
        format!("  {} ({count} place(s))", kind.collection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place() -> Place {
        Place {
            id: "1".to_string(),
            name: "Tunis".to_string(),
            slug: "tunis".to_string(),
            kind: PlaceKind::City,
            summary: None,
            region: Some("Tunis Governorate".to_string()),
        }
    }

    #[test]
    fn test_place_line_quiet_is_route_only() {
        assert_eq!(place_line(&place(), true), "/cities/tunis");
    }

    #[test]
    fn test_place_line_includes_name_and_region() {
        let line = place_line(&place(), false);
        assert!(line.contains("Tunis"));
        assert!(line.contains("/cities/tunis"));
        assert!(line.contains("Tunis Governorate"));
    }

    #[test]
    fn test_kind_with_count() {
        assert_eq!(kind_with_count(PlaceKind::City, 3, true), "cities");
        assert_eq!(
            kind_with_count(PlaceKind::Guide, 2, false),
            "  guides (2 place(s))"
        );
    }
}
