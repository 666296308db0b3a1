//! Showcase: faceted filtering, search, and sorting for an application catalog.
//!
//! Showcase is the engine behind a browsable catalog of example applications.
//! Given a fixed in-memory catalog and a user-driven filter selection, it
//! computes:
//! - the subset of records matching the selection
//! - the per-category facet value lists with active markers
//! - a deterministic, stably sorted ordering of the result
//!
//! Rendering (cards, dropdowns, result counts) is the embedder's concern; the
//! crate exposes a library boundary, not a UI.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Rendering Layer (embedder)                         │  ← Out of scope
//! └─────────────────────────────────────────────────────┘
//!          │ owns FilterSelection      │ consumes CatalogView
//! ┌─────────────────────────────────────────────────────┐
//! │  Engine Layer (engine/)                             │
//! │  - Selection state + transitions                    │
//! │  - Match predicate (search ∧ facets ∧ pro-only)     │
//! │  - Facet extraction, stable sorting                 │
//! │  - recompute() → CatalogView                        │
//! └─────────────────────────────────────────────────────┘
//!                        │ reads
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog Layer (catalog/)                           │
//! │  - Immutable records + display-name tables          │
//! │  - JSON loading and validation                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - ApplicationRecord, FacetCategory, SortKey        │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: immutable catalog container and JSON loading
//! - [`domain`]: core domain types (records, facet enums, errors)
//! - [`engine`]: selection state, match predicate, facets, sorting, view
//! - [`observability`]: tracing subscriber setup for embedders and tests
//!
//! # Example
//!
//! ```rust
//! use showcase::catalog::Catalog;
//! use showcase::engine::{recompute, FilterSelection};
//! use showcase::{FacetCategory, SortKey};
//!
//! let catalog = Catalog::from_json_str(r#"{
//!     "applications": [{
//!         "title": "Serverless Image Resizer",
//!         "description": "Resizes images uploaded to a bucket",
//!         "url": "https://example.com/resizer",
//!         "teaser": "/images/teasers/resizer.png",
//!         "services": ["lambda", "s3"],
//!         "platform": ["python"],
//!         "deployment": ["cdk"],
//!         "tags": ["serverless"],
//!         "complexity": ["intermediate"],
//!         "pro": false,
//!         "cloudPods": true
//!     }],
//!     "services": {"lambda": "Lambda", "s3": "S3"},
//!     "platforms": {"python": "Python"},
//!     "deployments": {"cdk": "CDK"},
//!     "complexities": {
//!         "data": {"basic": "Basic", "intermediate": "Intermediate", "advanced": "Advanced"},
//!         "order": ["basic", "intermediate", "advanced"]
//!     }
//! }"#)?;
//!
//! let mut selection = FilterSelection::default();
//! selection.set_search_term("image");
//! selection.toggle_facet(FacetCategory::Services, "lambda");
//! selection.set_sort_key(SortKey::Title);
//!
//! let view = recompute(&catalog, &selection);
//! assert_eq!(view.count, 1);
//! assert!(view.facets.services.iter().any(|f| f.code == "lambda" && f.active));
//! # Ok::<(), showcase::ShowcaseError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Explicit Recomputation
//!
//! Recomputation is an explicit pure function, not an implicit reactive graph:
//! the embedder mutates the [`FilterSelection`](engine::FilterSelection) it
//! owns, then calls [`recompute`](engine::recompute). Identical inputs always
//! yield identical output, so invoking it on every keystroke is safe and
//! memoization is purely optional.
//!
//! ## Stable, Non-Narrowing Facets
//!
//! Facet lists derive from the full catalog rather than the filtered subset;
//! a selected value is flagged active instead of the alternatives vanishing.
//! Dropdown contents therefore never jump around as the user types.
//!
//! ## Graceful Degradation Over Errors
//!
//! The engine has no error paths. Unmapped display codes render verbatim,
//! unknown complexity codes rank at the middle of the canonical order, and an
//! empty result set is an ordinary output. Only the catalog loader returns
//! [`ShowcaseError`].
//!
//! # Concurrency
//!
//! Single-threaded and synchronous. All engine functions are pure over
//! immutable inputs; the one mutable object, the selection, is owned by
//! exactly one caller and mutated only through its discrete operations.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod observability;

pub use catalog::{Catalog, CodeDisplayMap, ComplexityCatalog};
pub use domain::{ApplicationRecord, FacetCategory, Result, ShowcaseError, SortKey};
pub use engine::{recompute, CatalogView, FacetOption, FacetPanel, FilterSelection};
