//! Facet category and sort key types.
//!
//! This module defines the small enums that parameterize the engine: which
//! facet dimension an operation targets and which sort order the result list
//! uses. Using enums instead of string category names makes an unrecognized
//! category a compile error rather than a runtime caller-contract violation.

use serde::{Deserialize, Serialize};

use crate::domain::record::ApplicationRecord;

/// One of the four filterable facet dimensions.
///
/// Each category corresponds to a membership collection on
/// [`ApplicationRecord`] and a selected-code set on
/// [`FilterSelection`](crate::engine::FilterSelection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetCategory {
    /// Cloud services used by an application.
    Services,

    /// Platforms (languages) an application targets.
    Platforms,

    /// Deployment methods an application supports.
    Deployments,

    /// Complexity levels, ordered canonically rather than alphabetically.
    Complexity,
}

impl FacetCategory {
    /// All facet categories, in the order the rendering layer presents them.
    pub const ALL: [Self; 4] = [
        Self::Services,
        Self::Platforms,
        Self::Deployments,
        Self::Complexity,
    ];

    /// Returns the record's membership codes for this category.
    #[must_use]
    pub fn codes_of<'a>(self, record: &'a ApplicationRecord) -> &'a [String] {
        match self {
            Self::Services => &record.services,
            Self::Platforms => &record.platforms,
            Self::Deployments => &record.deployments,
            Self::Complexity => &record.complexity,
        }
    }
}

/// Sort order for the filtered result list.
///
/// Both orders are stable: records comparing equal keep their pre-sort
/// relative order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending case-insensitive order by title. The default.
    #[default]
    Title,

    /// Ascending order by the canonical rank of the primary complexity level.
    Complexity,
}
