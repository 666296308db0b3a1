//! Facet value extraction.
//!
//! This module derives, for each facet category, the distinct codes present in
//! a record collection, in the order the rendering layer should list them:
//! case-insensitive display-name order for services, platforms, and
//! deployments; canonical rank order for complexity.
//!
//! Facet lists are derived from the full catalog rather than the filtered
//! subset, so dropdown contents stay stable while the user narrows the
//! results; the view layer marks selected values as active instead of
//! removing unselected ones.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::domain::{ApplicationRecord, FacetCategory};

/// Returns the distinct codes for a facet category across the given records.
///
/// For [`FacetCategory::Complexity`] the result is the canonical order
/// filtered to codes actually present, preserving canonical rank. For the
/// other categories the result is ordered by display name, compared
/// case-insensitively, with the raw code as a deterministic tie-breaker when
/// two codes share a display name.
///
/// # Example
///
/// ```
/// use showcase::engine::distinct_codes;
/// use showcase::catalog::Catalog;
/// use showcase::FacetCategory;
///
/// let catalog = Catalog::default();
/// let codes = distinct_codes(&catalog, catalog.records(), FacetCategory::Services);
/// assert!(codes.is_empty());
/// ```
#[must_use]
pub fn distinct_codes(
    catalog: &Catalog,
    records: &[ApplicationRecord],
    category: FacetCategory,
) -> Vec<String> {
    let present: BTreeSet<&str> = records
        .iter()
        .flat_map(|record| category.codes_of(record))
        .map(String::as_str)
        .collect();

    match category {
        FacetCategory::Complexity => catalog
            .complexity_order()
            .iter()
            .filter(|code| present.contains(code.as_str()))
            .cloned()
            .collect(),
        _ => {
            let mut codes: Vec<String> = present.iter().map(|&code| code.to_string()).collect();
            codes.sort_by(|a, b| {
                let name_a = catalog.display_name(category, a).to_lowercase();
                let name_b = catalog.display_name(category, b).to_lowercase();
                name_a.cmp(&name_b).then_with(|| a.cmp(b))
            });
            codes
        }
    }
}
