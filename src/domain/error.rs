//! Error types for the showcase engine.
//!
//! This module defines the centralized error type [`ShowcaseError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The engine itself has no failure modes: missing display names fall back to the
//! raw code, unknown complexity codes rank at the middle of the canonical order,
//! and an empty result set is a valid output. Errors only arise at the catalog
//! loading boundary.

use thiserror::Error;

/// The main error type for showcase operations.
///
/// This enum consolidates the error conditions that can occur while loading and
/// validating a catalog. Variants wrapping underlying errors from external crates
/// use `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use showcase::ShowcaseError;
///
/// fn validate_catalog() -> Result<(), ShowcaseError> {
///     Err(ShowcaseError::Catalog("record has no complexity levels".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Catalog data is malformed or violates a data-model invariant.
    ///
    /// Occurs when a catalog file cannot be parsed as JSON or when a record
    /// breaks an invariant that the engine relies on, such as an empty
    /// complexity list. The string describes what went wrong.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations while reading a
    /// catalog file. Automatically converts from `std::io::Error` using the
    /// `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for showcase operations.
///
/// This is a type alias for `std::result::Result<T, ShowcaseError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ShowcaseError>;
