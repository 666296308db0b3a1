//! Filter selection state and its transition operations.
//!
//! This module defines [`FilterSelection`], the single mutable state object of
//! the system. It holds the current search term, the per-category selected
//! code sets, the pro-only flag, and the sort key, and exposes the discrete
//! operations the rendering layer calls in response to user input.
//!
//! # Ownership
//!
//! A `FilterSelection` is owned by exactly one caller at a time (typically the
//! rendering layer) and passed by reference into
//! [`recompute`](crate::engine::view::recompute) after each mutation. There is
//! no hidden observer graph: the caller mutates, then recomputes.

use std::collections::BTreeSet;

use crate::domain::{FacetCategory, SortKey};

/// Current user selection: search term, facet code sets, pro-only flag, and
/// sort key.
///
/// Selected codes use set semantics (no duplicates); a `BTreeSet` keeps
/// iteration deterministic. All fields default to "no constraint": empty term,
/// empty sets, `pro_only` false, and [`SortKey::Title`].
///
/// # Example
///
/// ```
/// use showcase::engine::FilterSelection;
/// use showcase::FacetCategory;
///
/// let mut selection = FilterSelection::default();
/// selection.toggle_facet(FacetCategory::Services, "lambda");
/// selection.set_search_term("image");
/// assert!(selection.has_active_filters());
///
/// selection.clear_all();
/// assert!(!selection.has_active_filters());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// Free-text search term. Matched case-insensitively against title,
    /// description, and tags.
    pub search_term: String,

    /// Selected service codes. Empty means no constraint.
    pub selected_services: BTreeSet<String>,

    /// Selected platform codes. Empty means no constraint.
    pub selected_platforms: BTreeSet<String>,

    /// Selected deployment codes. Empty means no constraint.
    pub selected_deployments: BTreeSet<String>,

    /// Selected complexity codes. Empty means no constraint.
    pub selected_complexities: BTreeSet<String>,

    /// When true, only Pro-tier records match.
    pub pro_only: bool,

    /// Sort order for the result list.
    pub sort_key: SortKey,
}

impl FilterSelection {
    /// Creates a selection with all defaults (no active filters).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected code set for a facet category.
    #[must_use]
    pub fn selected(&self, category: FacetCategory) -> &BTreeSet<String> {
        match category {
            FacetCategory::Services => &self.selected_services,
            FacetCategory::Platforms => &self.selected_platforms,
            FacetCategory::Deployments => &self.selected_deployments,
            FacetCategory::Complexity => &self.selected_complexities,
        }
    }

    fn selected_mut(&mut self, category: FacetCategory) -> &mut BTreeSet<String> {
        match category {
            FacetCategory::Services => &mut self.selected_services,
            FacetCategory::Platforms => &mut self.selected_platforms,
            FacetCategory::Deployments => &mut self.selected_deployments,
            FacetCategory::Complexity => &mut self.selected_complexities,
        }
    }

    /// Toggles a facet code in the named category's selected set.
    ///
    /// Removes the code if present, adds it otherwise. Applying the same
    /// toggle twice returns the set to its prior state.
    pub fn toggle_facet(&mut self, category: FacetCategory, code: &str) {
        let set = self.selected_mut(category);
        if !set.remove(code) {
            set.insert(code.to_string());
        }
        tracing::debug!(?category, code, selected = set.len(), "facet toggled");
    }

    /// Replaces the free-text search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Sets the pro-only flag.
    pub fn set_pro_only(&mut self, flag: bool) {
        self.pro_only = flag;
    }

    /// Sets the sort key for the result list.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Resets every field to its default.
    ///
    /// Clears all selected sets and the search term, turns off the pro-only
    /// flag, and restores the default [`SortKey::Title`].
    pub fn clear_all(&mut self) {
        *self = Self::default();
        tracing::debug!("selection cleared");
    }

    /// Returns true if any filter deviates from the defaults.
    ///
    /// The sort key is presentation state, not a filter, so it does not count
    /// as active.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || self.pro_only
            || FacetCategory::ALL
                .iter()
                .any(|category| !self.selected(*category).is_empty())
    }
}
