//! Catalog-specific error types
//!
//! All failure states of the catalog store: the underlying sled database,
//! record (de)serialization, seed-file parsing, and invalid records.

use thiserror::Error;

/// Catalog-specific errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Represents a sled database error
    #[error("Catalog store error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding record: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding record: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// Seed file could not be parsed
    #[error("Error while parsing seed file: {0}")]
    SeedError(#[from] serde_json::Error),

    /// Seed file could not be read
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// No place with the given id or slug
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    /// Record failed validation (e.g., empty id or name)
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}
