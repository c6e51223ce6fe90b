//! Integrity checks for example catalog content.
//!
//! Used by index construction, the `validate` command, and guard-rail tests.
//! Issues are collected rather than short-circuited so one run surfaces every
//! authoring defect in the content.

use crate::catalog::{ExampleCatalog, ExampleKey, ExampleRecord};
use crate::schema_loader::CatalogSchema;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Fields every record must carry with non-blank text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Title,
    Language,
    Description,
    Code,
}

impl RequiredField {
    pub fn as_str(self) -> &'static str {
        match self {
            RequiredField::Title => "title",
            RequiredField::Language => "language",
            RequiredField::Description => "description",
            RequiredField::Code => "code",
        }
    }
}

/// A single content-authoring defect.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// The document does not match the catalog schema.
    Schema { pointer: String, message: String },
    /// A required field is empty or whitespace-only.
    MissingField {
        key: ExampleKey,
        field: RequiredField,
    },
    /// The same key is defined twice; positions are zero-based indexes into
    /// the `examples` list.
    DuplicateKey {
        key: ExampleKey,
        first: usize,
        duplicate: usize,
    },
    /// The key does not match `^[a-z0-9]+(-[a-z0-9]+)*$`.
    InvalidKey { key: ExampleKey },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::Schema { pointer, message } => {
                let pointer = if pointer.is_empty() { "/" } else { pointer };
                write!(f, "{pointer}: {message}")
            }
            ValidationIssue::MissingField { key, field } => {
                write!(f, "{key} is missing required field '{}'", field.as_str())
            }
            ValidationIssue::DuplicateKey {
                key,
                first,
                duplicate,
            } => write!(
                f,
                "duplicate key {key} at examples[{duplicate}] (first defined at examples[{first}])"
            ),
            ValidationIssue::InvalidKey { key } => {
                write!(f, "key '{key}' must match ^[a-z0-9]+(-[a-z0-9]+)*$")
            }
        }
    }
}

/// Walk records in definition order and report blank required fields,
/// malformed keys, and repeated keys.
pub fn validate_records<'a, I>(records: I) -> Vec<ValidationIssue>
where
    I: IntoIterator<Item = &'a ExampleRecord>,
{
    let mut issues = Vec::new();
    let mut seen: BTreeMap<&ExampleKey, usize> = BTreeMap::new();
    for (position, record) in records.into_iter().enumerate() {
        if !record.key.is_well_formed() {
            issues.push(ValidationIssue::InvalidKey {
                key: record.key.clone(),
            });
        }
        if let Some(&first) = seen.get(&record.key) {
            issues.push(ValidationIssue::DuplicateKey {
                key: record.key.clone(),
                first,
                duplicate: position,
            });
        } else {
            seen.insert(&record.key, position);
        }

        let required = [
            (RequiredField::Title, record.title.as_str()),
            (RequiredField::Language, record.language.as_str()),
            (RequiredField::Description, record.description.as_str()),
            (RequiredField::Code, record.code.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                issues.push(ValidationIssue::MissingField {
                    key: record.key.clone(),
                    field,
                });
            }
        }
    }
    issues
}

/// Validate a parsed catalog document: schema first, then record checks.
///
/// Record checks only run once the document matches the schema, since a
/// document with the wrong shape cannot be decoded into records. The error
/// path is reserved for failures that are not content defects.
pub fn validate_catalog_value(schema: &CatalogSchema, value: &Value) -> Result<Vec<ValidationIssue>> {
    let violations = schema.violations(value);
    if !violations.is_empty() {
        return Ok(violations);
    }
    let catalog = ExampleCatalog::deserialize(value).context("decoding example catalog")?;
    Ok(validate_records(&catalog.examples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Language;
    use serde_json::json;

    fn record(key: &str) -> ExampleRecord {
        ExampleRecord {
            key: ExampleKey::new(key),
            title: "Title".into(),
            language: Language::Html,
            description: "Description".into(),
            code: "<p>code</p>".into(),
            output: None,
            interactive: None,
            notes: None,
        }
    }

    #[test]
    fn clean_records_have_no_issues() {
        let records = vec![record("html-links"), record("html-images")];
        assert!(validate_records(&records).is_empty());
    }

    #[test]
    fn blank_fields_are_reported_per_field() {
        let mut broken = record("html-links");
        broken.title = "   ".into();
        broken.code = String::new();
        let issues = validate_records([&broken]);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::MissingField {
                    key: ExampleKey::new("html-links"),
                    field: RequiredField::Title,
                },
                ValidationIssue::MissingField {
                    key: ExampleKey::new("html-links"),
                    field: RequiredField::Code,
                },
            ]
        );
    }

    #[test]
    fn other_language_label_must_not_be_blank() {
        let mut broken = record("html-links");
        broken.language = Language::Other(" ".into());
        let issues = validate_records([&broken]);
        assert_eq!(
            issues,
            vec![ValidationIssue::MissingField {
                key: ExampleKey::new("html-links"),
                field: RequiredField::Language,
            }]
        );
    }

    #[test]
    fn duplicates_report_both_positions() {
        let records = vec![
            record("js-arrow"),
            record("js-closures"),
            record("js-arrow"),
            record("js-arrow"),
        ];
        let issues = validate_records(&records);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::DuplicateKey {
                    key: ExampleKey::new("js-arrow"),
                    first: 0,
                    duplicate: 2,
                },
                ValidationIssue::DuplicateKey {
                    key: ExampleKey::new("js-arrow"),
                    first: 0,
                    duplicate: 3,
                },
            ]
        );
    }

    #[test]
    fn malformed_keys_are_reported() {
        let records = vec![record("JS_Arrow")];
        let issues = validate_records(&records);
        assert_eq!(
            issues,
            vec![ValidationIssue::InvalidKey {
                key: ExampleKey::new("JS_Arrow"),
            }]
        );
        assert!(issues[0].to_string().contains("JS_Arrow"));
    }

    #[test]
    fn schema_violations_short_circuit_record_checks() {
        let schema = CatalogSchema::embedded().unwrap();
        let document = json!({
            "schema_version": "example_catalog_v1",
            "examples": [
                {"key": "html-links", "title": "Links", "language": "HTML", "description": "d"},
                {"key": "html-links", "title": "Links", "language": "HTML", "description": "d", "code": "c"}
            ]
        });
        let issues = validate_catalog_value(&schema, &document).unwrap();
        assert!(!issues.is_empty());
        assert!(
            issues
                .iter()
                .all(|issue| matches!(issue, ValidationIssue::Schema { .. }))
        );
    }

    #[test]
    fn duplicate_keys_pass_schema_but_fail_record_checks() {
        let schema = CatalogSchema::embedded().unwrap();
        let document = json!({
            "schema_version": "example_catalog_v1",
            "examples": [
                {"key": "html-links", "title": "Links", "language": "HTML", "description": "d", "code": "c"},
                {"key": "html-links", "title": "Links again", "language": "HTML", "description": "d", "code": "c"}
            ]
        });
        let issues = validate_catalog_value(&schema, &document).unwrap();
        assert_eq!(
            issues,
            vec![ValidationIssue::DuplicateKey {
                key: ExampleKey::new("html-links"),
                first: 0,
                duplicate: 1,
            }]
        );
    }

    #[test]
    fn issues_serialize_with_kind_tag() {
        let issue = ValidationIssue::MissingField {
            key: ExampleKey::new("html-links"),
            field: RequiredField::Description,
        };
        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(
            value,
            json!({"kind": "missing_field", "key": "html-links", "field": "description"})
        );
    }
}
