//! Indexed, read-only view of an example catalog.
//!
//! The index is strict: a document that fails the schema, repeats a key, or
//! leaves a required field blank is rejected as a whole with every issue
//! listed, so consumers never observe a partially valid table. Once built,
//! the index is immutable and can be shared across threads without locking.

use crate::catalog::error::{CatalogError, ValidationReport};
use crate::catalog::identity::{ExampleKey, Language};
use crate::catalog::model::{ExampleCatalog, ExampleRecord};
use crate::schema_loader::CatalogSchema;
use crate::source::EMBEDDED_CATALOG_JSON;
use crate::validation::{ValidationIssue, validate_records};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
/// Example records keyed by `ExampleKey`, in definition order.
pub struct ExampleIndex {
    schema_version: String,
    by_key: IndexMap<ExampleKey, ExampleRecord>,
}

/// Key, title and language of one record; what a navigation menu needs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct NavEntry<'a> {
    pub key: &'a ExampleKey,
    pub title: &'a str,
    pub language: &'a Language,
}

impl<'a> From<&'a ExampleRecord> for NavEntry<'a> {
    fn from(record: &'a ExampleRecord) -> Self {
        Self {
            key: &record.key,
            title: &record.title,
            language: &record.language,
        }
    }
}

/// Records sharing a key topic (`html`, `js`, ...).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TopicGroup<'a> {
    pub topic: &'a str,
    pub entries: Vec<NavEntry<'a>>,
}

impl ExampleIndex {
    /// Build the index from the catalog compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_CATALOG_JSON).context("loading embedded example catalog")
    }

    /// Load, validate, and index a catalog file against the embedded schema.
    pub fn load(path: &Path) -> Result<Self> {
        let schema = CatalogSchema::embedded()?;
        Self::load_with_schema(path, &schema)
    }

    pub fn load_with_schema(path: &Path, schema: &CatalogSchema) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json_with_schema(&text, schema)
            .with_context(|| format!("loading {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let schema = CatalogSchema::embedded()?;
        Self::from_json_with_schema(text, &schema)
    }

    /// Parse catalog JSON, check it against `schema`, and build the index.
    pub fn from_json_with_schema(text: &str, schema: &CatalogSchema) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("parsing example catalog JSON")?;
        let violations = schema.violations(&value);
        if !violations.is_empty() {
            return Err(CatalogError::Malformed(ValidationReport(violations)).into());
        }
        let catalog = ExampleCatalog::deserialize(&value).context("decoding example catalog")?;
        Self::from_catalog(catalog)
    }

    /// Index an already decoded catalog.
    ///
    /// Runs the record checks (blank required fields, key shape, duplicate
    /// keys) and refuses to build when any issue is found.
    pub fn from_catalog(catalog: ExampleCatalog) -> Result<Self> {
        let issues = validate_records(&catalog.examples);
        if !issues.is_empty() {
            return Err(CatalogError::Malformed(ValidationReport(issues)).into());
        }

        let mut by_key = IndexMap::with_capacity(catalog.examples.len());
        for record in catalog.examples {
            by_key.insert(record.key.clone(), record);
        }
        let index = Self {
            schema_version: catalog.schema_version,
            by_key,
        };
        debug!(
            examples = index.len(),
            topics = index.topics().len(),
            schema_version = %index.schema_version,
            "indexed example catalog"
        );
        Ok(index)
    }

    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }

    /// Resolve a record by key.
    ///
    /// Returns `None` instead of erroring; a missing key is an expected
    /// outcome (stale bookmark, typo) that callers handle locally.
    pub fn get(&self, key: &str) -> Option<&ExampleRecord> {
        self.by_key.get(key)
    }

    /// Like `get`, but reports a missing key as `CatalogError::NotFound`.
    pub fn require(&self, key: &str) -> Result<&ExampleRecord, CatalogError> {
        self.get(key)
            .ok_or_else(|| CatalogError::NotFound(ExampleKey::new(key)))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Iterates keys in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &ExampleKey> {
        self.by_key.keys()
    }

    /// All keys in definition order.
    pub fn list_keys(&self) -> Vec<&str> {
        self.keys().map(ExampleKey::as_str).collect()
    }

    /// Iterates records in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &ExampleRecord> {
        self.by_key.values()
    }

    pub fn entries(&self) -> Vec<NavEntry<'_>> {
        self.iter().map(NavEntry::from).collect()
    }

    /// Group records by key topic.
    ///
    /// Groups appear in the order their topic is first seen; entries keep
    /// definition order even when a topic's keys are not contiguous.
    pub fn topics(&self) -> Vec<TopicGroup<'_>> {
        let mut groups: IndexMap<&str, Vec<NavEntry<'_>>> = IndexMap::new();
        for record in self.iter() {
            groups
                .entry(record.key.topic())
                .or_default()
                .push(NavEntry::from(record));
        }
        groups
            .into_iter()
            .map(|(topic, entries)| TopicGroup { topic, entries })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Re-run the record checks over the indexed table.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        validate_records(self.iter())
    }
}
