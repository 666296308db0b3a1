//! Catalog container and display-name lookup types.
//!
//! This module defines [`Catalog`], the immutable in-memory collection of
//! application records together with the code-to-display-name lookup tables for
//! each facet dimension. A catalog is constructed once from an external data
//! source and lives for the session; only the filter selection changes after
//! load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{ApplicationRecord, FacetCategory};

/// Mapping from an opaque facet code to its human-readable display name.
///
/// Lookups may miss: a code absent from the map is displayed verbatim. A
/// `BTreeMap` keeps serialization and iteration deterministic.
pub type CodeDisplayMap = BTreeMap<String, String>;

/// Display names and canonical ordering for complexity levels.
///
/// Unlike the other facet dimensions, complexity values have an author-defined
/// ranking used both for facet enumeration and for sorting, so the display map
/// is paired with an explicit order.
///
/// Serialized as `{"data": {...}, "order": [...]}`, matching the original
/// catalog data layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityCatalog {
    /// Code → display name, with the usual verbatim-code fallback on miss.
    #[serde(rename = "data")]
    pub display_names: CodeDisplayMap,

    /// Canonical ranking of complexity codes, least complex first.
    #[serde(rename = "order")]
    pub canonical_order: Vec<String>,
}

/// Immutable in-memory catalog of application records.
///
/// Holds the record collection plus the three code→display-name tables
/// (services, platforms, deployments) and the complexity catalog. All engine
/// operations read from a `Catalog`; none mutate it.
///
/// # Example
///
/// ```
/// use showcase::catalog::{Catalog, CodeDisplayMap, ComplexityCatalog};
/// use showcase::FacetCategory;
///
/// let catalog = Catalog::new(
///     vec![],
///     CodeDisplayMap::new(),
///     CodeDisplayMap::new(),
///     CodeDisplayMap::new(),
///     ComplexityCatalog::default(),
/// );
///
/// // Unmapped codes are displayed verbatim.
/// assert_eq!(catalog.display_name(FacetCategory::Services, "s3"), "s3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ApplicationRecord>,
    services: CodeDisplayMap,
    platforms: CodeDisplayMap,
    deployments: CodeDisplayMap,
    complexities: ComplexityCatalog,
}

impl Catalog {
    /// Creates a catalog from records and the per-category display tables.
    ///
    /// This constructor performs no validation; use
    /// [`Catalog::from_json_str`](crate::catalog::json) or
    /// [`Catalog::from_json_file`](crate::catalog::json) to load and validate
    /// external data.
    #[must_use]
    pub fn new(
        records: Vec<ApplicationRecord>,
        services: CodeDisplayMap,
        platforms: CodeDisplayMap,
        deployments: CodeDisplayMap,
        complexities: ComplexityCatalog,
    ) -> Self {
        Self {
            records,
            services,
            platforms,
            deployments,
            complexities,
        }
    }

    /// Returns all records in the catalog, in authored order.
    #[must_use]
    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    /// Resolves a facet code to its display name for the given category.
    ///
    /// Falls back to the code itself when the lookup table has no entry, so
    /// unmapped codes degrade gracefully instead of erroring.
    ///
    /// # Example
    ///
    /// ```
    /// # use showcase::catalog::{Catalog, CodeDisplayMap, ComplexityCatalog};
    /// # use showcase::FacetCategory;
    /// let mut services = CodeDisplayMap::new();
    /// services.insert("lambda".to_string(), "Lambda".to_string());
    /// let catalog = Catalog::new(
    ///     vec![], services,
    ///     CodeDisplayMap::new(), CodeDisplayMap::new(),
    ///     ComplexityCatalog::default(),
    /// );
    ///
    /// assert_eq!(catalog.display_name(FacetCategory::Services, "lambda"), "Lambda");
    /// assert_eq!(catalog.display_name(FacetCategory::Services, "XYZ"), "XYZ");
    /// ```
    #[must_use]
    pub fn display_name<'a>(&'a self, category: FacetCategory, code: &'a str) -> &'a str {
        let table = match category {
            FacetCategory::Services => &self.services,
            FacetCategory::Platforms => &self.platforms,
            FacetCategory::Deployments => &self.deployments,
            FacetCategory::Complexity => &self.complexities.display_names,
        };
        table.get(code).map_or(code, String::as_str)
    }

    /// Returns the sort rank of a complexity code.
    ///
    /// The rank is the code's index in the canonical order. Codes absent from
    /// the order rank at the middle index, so unknown levels sort between the
    /// known extremes rather than clustering at either end.
    #[must_use]
    pub fn complexity_rank(&self, code: &str) -> usize {
        let order = &self.complexities.canonical_order;
        order
            .iter()
            .position(|known| known == code)
            .unwrap_or(order.len() / 2)
    }

    /// Returns the canonical complexity ordering, least complex first.
    #[must_use]
    pub fn complexity_order(&self) -> &[String] {
        &self.complexities.canonical_order
    }
}

/// Serialized catalog container format.
///
/// This is the top-level structure of a catalog data file, matching the
/// original props layout: a record array plus one lookup table per facet
/// dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CatalogData {
    pub applications: Vec<ApplicationRecord>,
    #[serde(default)]
    pub services: CodeDisplayMap,
    #[serde(default)]
    pub platforms: CodeDisplayMap,
    #[serde(default)]
    pub deployments: CodeDisplayMap,
    #[serde(default)]
    pub complexities: ComplexityCatalog,
}

impl From<CatalogData> for Catalog {
    fn from(data: CatalogData) -> Self {
        Self {
            records: data.applications,
            services: data.services,
            platforms: data.platforms,
            deployments: data.deployments,
            complexities: data.complexities,
        }
    }
}
