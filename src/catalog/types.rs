//! Key types for the catalog store
//!
//! The name index orders places alphabetically without decoding records:
//! its keys are the lowercased name joined to the record id with a NUL
//! byte, so a plain byte-order scan of the tree is a name-ascending scan
//! of the catalog.

use super::error::CatalogError;

/// Separator between the name part and the id part of a [`NameKey`]
///
/// NUL sorts before every other byte, so "nice" < "nice\0x" < "nicer".
const SEPARATOR: u8 = 0;

/// Composite key for the name index: `lowercase(name) \0 id`
///
/// The id suffix keeps keys unique when two places share a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameKey(Vec<u8>);

impl NameKey {
    /// Build the index key for a place name and id
    #[must_use]
    pub fn new(name: &str, id: &str) -> Self {
        let lower = name.to_lowercase();
        let mut bytes = Vec::with_capacity(lower.len() + 1 + id.len());
        bytes.extend_from_slice(lower.as_bytes());
        bytes.push(SEPARATOR);
        bytes.extend_from_slice(id.as_bytes());
        Self(bytes)
    }

    /// Raw key bytes for the sled tree
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Split a raw index key back into its lowercased-name part
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidRecord` if the key has no separator
    /// or the name part is not valid UTF-8.
    pub fn name_part(raw: &[u8]) -> Result<&str, CatalogError> {
        let split = raw
            .iter()
            .position(|&b| b == SEPARATOR)
            .ok_or_else(|| CatalogError::InvalidRecord("name key missing separator".to_string()))?;
        std::str::from_utf8(&raw[..split])
            .map_err(|e| CatalogError::InvalidRecord(format!("name key not UTF-8: {e}")))
    }
}
