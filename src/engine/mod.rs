//! Filtering, search, and sort engine.
//!
//! This module implements the mutable selection state and the pure functions
//! that turn a catalog plus a selection into a renderable view. The data flow
//! is unidirectional and explicit:
//!
//! ```text
//! User Input → FilterSelection mutation → recompute(catalog, selection) → CatalogView
//! ```
//!
//! There is no reactive graph and no hidden state: the rendering layer owns
//! the [`FilterSelection`], mutates it through its discrete operations, and
//! calls [`recompute`] afterwards.
//!
//! # Modules
//!
//! - [`selection`]: the [`FilterSelection`] state object and its operations
//! - [`query`]: the per-record match predicate
//! - [`facets`]: distinct facet value extraction with display-name ordering
//! - [`sort`]: stable title and complexity ordering
//! - [`view`]: the [`recompute`] pipeline producing a [`CatalogView`]

pub mod facets;
pub mod query;
pub mod selection;
pub mod sort;
pub mod view;

pub use facets::distinct_codes;
pub use query::matches;
pub use selection::FilterSelection;
pub use sort::sort_records;
pub use view::{recompute, CatalogView, FacetOption, FacetPanel};
