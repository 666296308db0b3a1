//! Core domain types for the showcase engine.
//!
//! This module contains the foundational types shared across the crate:
//!
//! - [`ApplicationRecord`]: one immutable catalog entry
//! - [`FacetCategory`] and [`SortKey`]: the enums parameterizing engine operations
//! - [`ShowcaseError`] and [`Result`]: centralized error handling

pub mod error;
pub mod facet;
pub mod record;

pub use error::{Result, ShowcaseError};
pub use facet::{FacetCategory, SortKey};
pub use record::ApplicationRecord;
