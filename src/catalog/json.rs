//! JSON catalog loading.
//!
//! This module loads a [`Catalog`] from a JSON data file or string. The file
//! format mirrors the original catalog props: an `applications` array plus one
//! code→display-name table per facet dimension and a complexity catalog with
//! its canonical order.
//!
//! Loading validates the data-model invariants the engine relies on, so the
//! engine itself never has to handle malformed records.
//!
//! # File Format
//!
//! ```json
//! {
//!   "applications": [
//!     {
//!       "title": "Serverless Image Resizer",
//!       "description": "Resizes images on upload",
//!       "url": "https://example.com/image-resizer",
//!       "teaser": "/images/teasers/image-resizer.png",
//!       "services": ["lambda", "s3"],
//!       "platform": ["python"],
//!       "deployment": ["cdk"],
//!       "tags": ["serverless", "images"],
//!       "complexity": ["intermediate"],
//!       "pro": false,
//!       "cloudPods": true
//!     }
//!   ],
//!   "services": { "lambda": "Lambda", "s3": "S3" },
//!   "platforms": { "python": "Python" },
//!   "deployments": { "cdk": "CDK" },
//!   "complexities": {
//!     "data": { "basic": "Basic", "intermediate": "Intermediate", "advanced": "Advanced" },
//!     "order": ["basic", "intermediate", "advanced"]
//!   }
//! }
//! ```

use std::path::Path;

use crate::catalog::models::{Catalog, CatalogData};
use crate::domain::error::{Result, ShowcaseError};

impl Catalog {
    /// Loads and validates a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The contents are not valid catalog JSON
    /// - Any record has an empty complexity list
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use showcase::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_json_file("data/applications.json")?;
    /// # Ok::<(), showcase::ShowcaseError>(())
    /// ```
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading catalog file");

        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parses and validates a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid catalog JSON or if any
    /// record has an empty complexity list.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(contents)
            .map_err(|e| ShowcaseError::Catalog(format!("failed to parse JSON: {e}")))?;

        validate(&data)?;

        tracing::debug!(
            record_count = data.applications.len(),
            service_count = data.services.len(),
            platform_count = data.platforms.len(),
            deployment_count = data.deployments.len(),
            "catalog loaded"
        );

        Ok(Self::from(data))
    }
}

/// Checks the invariants the engine relies on.
///
/// Currently the only invariant enforced at load time is that every record
/// carries at least one complexity level, since the first level drives
/// complexity sorting.
fn validate(data: &CatalogData) -> Result<()> {
    for record in &data.applications {
        if record.complexity.is_empty() {
            return Err(ShowcaseError::Catalog(format!(
                "application '{}' has no complexity levels",
                record.title
            )));
        }
    }
    Ok(())
}
