//! Application record domain model.
//!
//! This module defines the core [`ApplicationRecord`] type representing one entry
//! in the showcase catalog: an example application with its descriptive text,
//! facet code memberships, and pricing flags. Records are immutable after the
//! catalog is loaded; only the filter selection changes during a session.

use serde::{Deserialize, Serialize};

/// One application entry in the showcase catalog.
///
/// Field names in the serialized form match the original catalog data layout:
/// the facet membership arrays are stored under `services`, `platform`,
/// `deployment`, and `complexity`, and the CloudPods flag under `cloudPods`.
///
/// Facet membership collections contain opaque codes, not display names; the
/// [`Catalog`](crate::catalog::Catalog) resolves codes to human-readable names.
/// The collections are authored duplicate-free and their order is preserved for
/// the rendering layer (service icons are drawn in authored order).
///
/// # Invariants
///
/// - `complexity` is never empty; the first element is the primary complexity
///   level used for sorting. The catalog loader rejects records that violate
///   this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// Display title of the application.
    pub title: String,

    /// Short description shown on the application card.
    pub description: String,

    /// Link to the application's project page.
    pub url: String,

    /// Reference to the teaser image asset.
    pub teaser: String,

    /// Service codes this application uses.
    #[serde(default)]
    pub services: Vec<String>,

    /// Platform (language) codes this application targets.
    #[serde(default, rename = "platform")]
    pub platforms: Vec<String>,

    /// Deployment method codes this application supports.
    #[serde(default, rename = "deployment")]
    pub deployments: Vec<String>,

    /// Free-form tags matched by free-text search.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Complexity level codes, primary level first. Never empty.
    pub complexity: Vec<String>,

    /// Whether this is a Pro-tier application.
    #[serde(default)]
    pub pro: bool,

    /// Whether this application supports CloudPods.
    #[serde(default, rename = "cloudPods")]
    pub cloud_pods: bool,
}

impl ApplicationRecord {
    /// Returns the primary complexity code, if the record has one.
    ///
    /// The loader guarantees a non-empty complexity list, so this only returns
    /// `None` for hand-constructed records that skipped validation. Callers
    /// treat a missing primary level as the middle canonical rank.
    #[must_use]
    pub fn primary_complexity(&self) -> Option<&str> {
        self.complexity.first().map(String::as_str)
    }
}
