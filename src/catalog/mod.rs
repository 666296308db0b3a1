//! Immutable catalog container and loading.
//!
//! This module owns the read-only side of the system: the record collection,
//! the code→display-name lookup tables, and the JSON loader that constructs
//! and validates a catalog from an external data file.
//!
//! # Modules
//!
//! - [`models`]: the [`Catalog`] container and lookup table types
//! - [`json`]: JSON file/string loading with invariant validation

pub mod json;
pub mod models;

pub use models::{Catalog, CodeDisplayMap, ComplexityCatalog};
