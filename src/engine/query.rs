//! Match predicate combining search, facet, and pro-only checks.
//!
//! This module implements the core filtering decision: does one record satisfy
//! the current selection? The predicate is a conjunction of independent checks
//! that short-circuits on the first failure:
//!
//! 1. **Search**: the lower-cased term is a substring of the lower-cased
//!    title or description, or of any tag. An empty term passes.
//! 2. **Facets**: for each category with a non-empty selected set, the
//!    record's membership collection must intersect it. Codes within a
//!    category combine with OR; categories combine with AND.
//! 3. **Pro-only**: when the flag is set, only Pro records pass.

use std::collections::BTreeSet;

use crate::domain::{ApplicationRecord, FacetCategory};
use crate::engine::selection::FilterSelection;

/// Returns true if the record satisfies every active component of the
/// selection.
///
/// Pure and idempotent: the same `(record, selection)` pair always yields the
/// same answer.
///
/// # Example
///
/// ```
/// use showcase::engine::{matches, FilterSelection};
/// # let record = showcase::ApplicationRecord {
/// #     title: "Image Resizer".into(),
/// #     description: "Deploys an AWS Lambda function".into(),
/// #     url: String::new(), teaser: String::new(),
/// #     services: vec![], platforms: vec![], deployments: vec![],
/// #     tags: vec![], complexity: vec!["basic".into()],
/// #     pro: false, cloud_pods: false,
/// # };
///
/// let mut selection = FilterSelection::default();
/// selection.set_search_term("LAMBDA");
/// assert!(matches(&record, &selection));
/// ```
#[must_use]
pub fn matches(record: &ApplicationRecord, selection: &FilterSelection) -> bool {
    if !matches_search(record, &selection.search_term) {
        return false;
    }

    for category in FacetCategory::ALL {
        if !matches_facet(category.codes_of(record), selection.selected(category)) {
            return false;
        }
    }

    if selection.pro_only && !record.pro {
        return false;
    }

    true
}

/// Case-insensitive substring search over title, description, and tags.
///
/// Tags match by substring containment, not exact equality, so the term
/// "server" matches a record tagged "serverless".
fn matches_search(record: &ApplicationRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

/// One category's facet check: empty selection passes, otherwise the record
/// must carry at least one selected code.
fn matches_facet(record_codes: &[String], selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || record_codes.iter().any(|code| selected.contains(code))
}
