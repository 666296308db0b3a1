//! View computation: filtered results, facet lists, and result count.
//!
//! This module composes the match predicate, the sorter, and the facet
//! extractor into [`recompute`], the single entry point the rendering layer
//! calls after every selection change. The function is pure: identical
//! `(catalog, selection)` inputs always yield identical output, so the caller
//! may invoke it on every state change without debouncing, or cache results
//! keyed by a selection snapshot as a performance optimization.

use crate::catalog::Catalog;
use crate::domain::{ApplicationRecord, FacetCategory};
use crate::engine::facets::distinct_codes;
use crate::engine::query::matches;
use crate::engine::selection::FilterSelection;
use crate::engine::sort::sort_records;

/// One value in a facet dropdown: its code, resolved display name, and
/// whether it is currently selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    /// Opaque facet code, posted back through
    /// [`FilterSelection::toggle_facet`].
    pub code: String,

    /// Human-readable name, falling back to the code when unmapped.
    pub display_name: String,

    /// True if the code is a member of the corresponding selected set.
    pub active: bool,
}

/// Facet option lists for all four categories.
///
/// Lists are derived from the full catalog, so they do not narrow as filters
/// are applied; selection membership is reflected in
/// [`FacetOption::active`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetPanel {
    /// Services, in case-insensitive display-name order.
    pub services: Vec<FacetOption>,

    /// Platforms, in case-insensitive display-name order.
    pub platforms: Vec<FacetOption>,

    /// Deployments, in case-insensitive display-name order.
    pub deployments: Vec<FacetOption>,

    /// Complexities, in canonical rank order.
    pub complexities: Vec<FacetOption>,
}

impl FacetPanel {
    /// Returns the option list for a facet category.
    #[must_use]
    pub fn options(&self, category: FacetCategory) -> &[FacetOption] {
        match category {
            FacetCategory::Services => &self.services,
            FacetCategory::Platforms => &self.platforms,
            FacetCategory::Deployments => &self.deployments,
            FacetCategory::Complexity => &self.complexities,
        }
    }
}

/// Everything the rendering layer needs to draw the showcase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    /// Records matching the selection, in sort-key order.
    pub results: Vec<ApplicationRecord>,

    /// Facet option lists with active markers.
    pub facets: FacetPanel,

    /// Number of matching records. Always equals `results.len()`; zero is a
    /// valid output, not an error.
    pub count: usize,
}

/// Computes the filtered, sorted result list and the facet panel for the
/// current selection.
///
/// Pipeline: filter the catalog's records through the match predicate, sort
/// by the selection's sort key, and independently derive the facet lists from
/// the full catalog, marking each value active if it is selected.
///
/// # Example
///
/// ```
/// use showcase::catalog::Catalog;
/// use showcase::engine::{recompute, FilterSelection};
///
/// let catalog = Catalog::default();
/// let selection = FilterSelection::default();
///
/// let view = recompute(&catalog, &selection);
/// assert_eq!(view.count, 0);
/// ```
#[must_use]
pub fn recompute(catalog: &Catalog, selection: &FilterSelection) -> CatalogView {
    let _span = tracing::debug_span!(
        "recompute",
        total_records = catalog.records().len(),
        term_len = selection.search_term.len(),
        sort_key = ?selection.sort_key,
    )
    .entered();

    let matching: Vec<ApplicationRecord> = catalog
        .records()
        .iter()
        .filter(|record| matches(record, selection))
        .cloned()
        .collect();

    let results = sort_records(&matching, selection.sort_key, catalog);

    let facets = FacetPanel {
        services: facet_options(catalog, selection, FacetCategory::Services),
        platforms: facet_options(catalog, selection, FacetCategory::Platforms),
        deployments: facet_options(catalog, selection, FacetCategory::Deployments),
        complexities: facet_options(catalog, selection, FacetCategory::Complexity),
    };

    let count = results.len();
    tracing::debug!(count, "view recomputed");

    CatalogView {
        results,
        facets,
        count,
    }
}

/// Builds one category's option list from the full catalog.
fn facet_options(
    catalog: &Catalog,
    selection: &FilterSelection,
    category: FacetCategory,
) -> Vec<FacetOption> {
    let selected = selection.selected(category);
    distinct_codes(catalog, catalog.records(), category)
        .into_iter()
        .map(|code| {
            let display_name = catalog.display_name(category, &code).to_string();
            let active = selected.contains(&code);
            FacetOption {
                code,
                display_name,
                active,
            }
        })
        .collect()
}
