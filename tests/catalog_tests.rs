//! Integration tests for catalog loading and validation.

use std::io::Write;

use showcase::catalog::Catalog;
use showcase::{FacetCategory, ShowcaseError};

const SAMPLE: &str = r#"{
    "applications": [
        {
            "title": "Serverless Image Resizer",
            "description": "Resizes images uploaded to a bucket",
            "url": "https://example.com/resizer",
            "teaser": "/images/teasers/resizer.png",
            "services": ["lambda", "s3"],
            "platform": ["python"],
            "deployment": ["cdk"],
            "tags": ["serverless", "images"],
            "complexity": ["intermediate"],
            "pro": true,
            "cloudPods": true
        }
    ],
    "services": {"lambda": "Lambda", "s3": "S3"},
    "platforms": {"python": "Python"},
    "deployments": {"cdk": "CDK"},
    "complexities": {
        "data": {"basic": "Basic", "intermediate": "Intermediate", "advanced": "Advanced"},
        "order": ["basic", "intermediate", "advanced"]
    }
}"#;

#[test]
fn loads_catalog_from_string() {
    let catalog = Catalog::from_json_str(SAMPLE).unwrap();
    assert_eq!(catalog.records().len(), 1);

    let record = &catalog.records()[0];
    assert_eq!(record.title, "Serverless Image Resizer");
    assert_eq!(record.platforms, ["python"]);
    assert_eq!(record.deployments, ["cdk"]);
    assert!(record.pro);
    assert!(record.cloud_pods);
    assert_eq!(record.primary_complexity(), Some("intermediate"));
}

#[test]
fn loads_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let catalog = Catalog::from_json_file(file.path()).unwrap();
    assert_eq!(catalog.records().len(), 1);
    assert_eq!(catalog.display_name(FacetCategory::Services, "s3"), "S3");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Catalog::from_json_file("/nonexistent/applications.json").unwrap_err();
    assert!(matches!(err, ShowcaseError::Io(_)));
}

#[test]
fn malformed_json_is_a_catalog_error() {
    let err = Catalog::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, ShowcaseError::Catalog(_)));
}

#[test]
fn rejects_record_without_complexity_levels() {
    let data = r#"{
        "applications": [
            {
                "title": "Broken",
                "description": "",
                "url": "https://example.com/broken",
                "teaser": "/images/teasers/broken.png",
                "complexity": []
            }
        ]
    }"#;

    let err = Catalog::from_json_str(data).unwrap_err();
    match err {
        ShowcaseError::Catalog(message) => assert!(message.contains("Broken")),
        other => panic!("expected catalog error, got {other:?}"),
    }
}

#[test]
fn optional_fields_default_when_absent() {
    let data = r#"{
        "applications": [
            {
                "title": "Minimal",
                "description": "Bare-bones entry",
                "url": "https://example.com/minimal",
                "teaser": "/images/teasers/minimal.png",
                "complexity": ["basic"]
            }
        ]
    }"#;

    let catalog = Catalog::from_json_str(data).unwrap();
    let record = &catalog.records()[0];
    assert!(record.services.is_empty());
    assert!(record.tags.is_empty());
    assert!(!record.pro);
    assert!(!record.cloud_pods);

    // No lookup tables at all: every code displays verbatim and unknown
    // complexity codes rank at the middle of an empty order.
    assert_eq!(catalog.display_name(FacetCategory::Platforms, "go"), "go");
    assert_eq!(catalog.complexity_rank("basic"), 0);
}
