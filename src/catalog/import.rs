//! Seed the catalog from a JSON records file
//!
//! The seed format is a JSON array of place objects. Only `name` is
//! mandatory; missing slugs are derived from the name (kebab-case) and a
//! missing id falls back to the slug. Records without a kind use the
//! import-wide default, or are skipped when there is none.

use super::error::CatalogError;
use super::Catalog;
use crate::{Place, PlaceKind};
use heck::ToKebabCase;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One entry of the seed file, before normalization
#[derive(Debug, Deserialize)]
struct SeedPlace {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    kind: Option<PlaceKind>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    region: Option<String>,
}

/// Outcome of an import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of records inserted or updated
    pub imported: usize,
    /// Names of records that could not be imported, with the reason
    pub skipped: Vec<String>,
}

/// Derive a URL-safe slug from a place name
#[must_use]
pub fn slugify(name: &str) -> String {
    name.to_kebab_case()
}

/// Import places from a JSON seed file
///
/// Existing records with the same id are overwritten. Records that fail
/// validation are collected in the report instead of aborting the run.
///
/// # Arguments
/// * `catalog` - Store to import into
/// * `path` - Seed file path
/// * `default_kind` - Kind for records that do not declare one
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or parsed, or if a
/// store operation fails.
pub fn import_json(
    catalog: &Catalog,
    path: &Path,
    default_kind: Option<PlaceKind>,
) -> Result<ImportReport, CatalogError> {
    let raw = fs::read_to_string(path)?;
    let seeds: Vec<SeedPlace> = serde_json::from_str(&raw)?;

    let mut report = ImportReport::default();
    for seed in seeds {
        let Some(kind) = seed.kind.or(default_kind) else {
            report
                .skipped
                .push(format!("{}: no kind and no default given", seed.name));
            continue;
        };

        if seed.name.trim().is_empty() {
            report.skipped.push("<unnamed>: empty name".to_string());
            continue;
        }

        let slug = seed
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slugify(&seed.name));
        let id = seed
            .id
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slug.clone());

        let place = Place {
            id,
            name: seed.name,
            slug,
            kind,
            summary: seed.summary,
            region: seed.region,
        };
        catalog.insert(&place)?;
        report.imported += 1;
    }

    Ok(report)
}
