//! Stable result ordering.
//!
//! This module orders a record sequence by the selected sort key. Both orders
//! are stable — records with equal keys keep their pre-sort relative order —
//! and sorting returns a new sequence rather than mutating its input.

use crate::catalog::Catalog;
use crate::domain::{ApplicationRecord, SortKey};

/// Returns the records ordered by the given sort key.
///
/// - [`SortKey::Title`]: ascending case-insensitive lexicographic order on the
///   title, ties broken by input order.
/// - [`SortKey::Complexity`]: ascending by the canonical rank of the primary
///   complexity level ([`Catalog::complexity_rank`]), ties broken by input
///   order. Records without a primary level rank at the middle of the
///   canonical order.
#[must_use]
pub fn sort_records(
    records: &[ApplicationRecord],
    key: SortKey,
    catalog: &Catalog,
) -> Vec<ApplicationRecord> {
    let mut sorted: Vec<ApplicationRecord> = records.to_vec();
    match key {
        SortKey::Title => {
            sorted.sort_by_cached_key(|record| record.title.to_lowercase());
        }
        SortKey::Complexity => {
            let middle = catalog.complexity_order().len() / 2;
            sorted.sort_by_key(|record| {
                record
                    .primary_complexity()
                    .map_or(middle, |code| catalog.complexity_rank(code))
            });
        }
    }
    sorted
}
